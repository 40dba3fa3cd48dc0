// SPDX-License-Identifier: MPL-2.0
//! `iced_primer` is a small tutorial lesson browser built with the Iced GUI framework.
//!
//! Lessons are plain text files discovered in a directory and shown one at a
//! time. The interesting part is the in-process error reporting core: a
//! notification store with a toast presenter for reported errors, and a
//! supervision layer that isolates render failures behind fallback surfaces.

pub mod app;
pub mod diagnostics;
pub mod error;
pub mod lesson_scanner;
pub mod ui;
