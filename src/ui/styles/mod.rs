// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the shared UI components.

pub mod button;
