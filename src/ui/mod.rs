// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Lesson catalog
//! - [`lesson`] - Single lesson reader
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Error record store, reporter capability and toasts
//! - [`supervision`] - Render failure boundary and crash surfaces
//! - [`styles`] - Centralized styling (buttons)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod home;
pub mod lesson;
pub mod notifications;
pub mod styles;
pub mod supervision;
pub mod theming;
