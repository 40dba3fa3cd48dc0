// SPDX-License-Identifier: MPL-2.0
//! Render failure isolation.
//!
//! Panics raised while building view output are caught at three
//! granularities, innermost first:
//!
//! - [`boundary`] - `RenderBoundary` around a single subtree; terminal once
//!   failed, recovered only by remounting
//! - [`crash`] - `CrashGuard` around a screen (route scope) or the whole
//!   view (application scope); resettable via its retry control
//! - [`failure`] - the shared `capture` primitive and `RenderFailure` value
//!
//! Failures in event handlers or asynchronous tasks are ordinary `Result`s
//! and never pass through here; this layer exists for the render pass only.

mod boundary;
mod crash;
mod failure;

pub use boundary::RenderBoundary;
pub use crash::{
    route_view, application_view, CrashGuard, APPLICATION_GENERIC_MESSAGE,
    APPLICATION_RETRY_LABEL, APPLICATION_TITLE, ROUTE_GENERIC_MESSAGE, ROUTE_RETRY_LABEL,
    ROUTE_TITLE,
};
pub use failure::{capture, RenderFailure, UNKNOWN_FAILURE_MESSAGE};
