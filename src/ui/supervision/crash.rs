// SPDX-License-Identifier: MPL-2.0
//! Route- and application-level crash surfaces.
//!
//! When a render failure escapes every [`RenderBoundary`] inside a screen,
//! the `CrashGuard` for that granularity catches it, logs it for diagnostics
//! and replaces the output with a full-surface fallback offering a retry
//! control. Unlike a boundary, a guard can be reset: the retry message calls
//! [`CrashGuard::reset`], which re-attempts the build on the next pass.
//!
//! [`RenderBoundary`]: super::RenderBoundary

use super::failure::{self, RenderFailure};
use crate::diagnostics::{CrashScope, DiagnosticsLog};
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};
use std::cell::RefCell;

/// Heading of the route-level surface.
pub const ROUTE_TITLE: &str = "Something went wrong!";
/// Shown when a route failure carries no message.
pub const ROUTE_GENERIC_MESSAGE: &str = "An unexpected issue occurred on this page.";
/// Label of the route-level retry control.
pub const ROUTE_RETRY_LABEL: &str = "Try again";

/// Heading of the application-level surface.
pub const APPLICATION_TITLE: &str = "Application Error";
/// Shown when an application failure carries no message.
pub const APPLICATION_GENERIC_MESSAGE: &str =
    "A critical error has occurred. Please restart the app.";
/// Label of the application-level retry control.
pub const APPLICATION_RETRY_LABEL: &str = "Restart App";

/// Latching supervisor for one crash granularity.
#[derive(Debug)]
pub struct CrashGuard {
    scope: CrashScope,
    failure: RefCell<Option<RenderFailure>>,
    diagnostics: Option<DiagnosticsLog>,
}

impl CrashGuard {
    /// Creates a healthy guard for the given scope.
    #[must_use]
    pub fn new(scope: CrashScope) -> Self {
        Self {
            scope,
            failure: RefCell::new(None),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics log that caught failures are recorded to.
    pub fn set_diagnostics(&mut self, log: DiagnosticsLog) {
        self.diagnostics = Some(log);
    }

    /// Returns the scope this guard supervises.
    #[must_use]
    pub fn scope(&self) -> CrashScope {
        self.scope
    }

    /// Returns whether the guard has latched a failure.
    #[must_use]
    pub fn is_tripped(&self) -> bool {
        self.failure.borrow().is_some()
    }

    /// Returns the latched failure, if any.
    #[must_use]
    pub fn failure(&self) -> Option<RenderFailure> {
        self.failure.borrow().clone()
    }

    /// Clears the latch so the next render re-attempts the build.
    ///
    /// This is the `reset` half of the `(failure, reset)` pair the crash
    /// surfaces consume; the hosting update loop calls it when the retry
    /// control is pressed.
    pub fn reset(&mut self) {
        *self.failure.borrow_mut() = None;
    }

    /// Supervises a build at this guard's granularity.
    ///
    /// A fresh trip is recorded to diagnostics exactly once; re-renders while
    /// tripped reuse the latched failure without running the builder.
    pub fn supervise<T>(
        &self,
        build: impl FnOnce() -> T,
        fallback: impl FnOnce(&RenderFailure) -> T,
    ) -> T {
        if let Some(failure) = self.failure.borrow().as_ref() {
            return fallback(failure);
        }

        match failure::capture(build) {
            Ok(output) => output,
            Err(caught) => {
                if let Some(log) = &self.diagnostics {
                    log.record_crash(self.scope, caught.message());
                }
                let output = fallback(&caught);
                *self.failure.borrow_mut() = Some(caught);
                output
            }
        }
    }

    /// Supervises an Iced view builder, substituting this scope's crash
    /// surface with `retry` wired to its retry control.
    pub fn view<'a, M: Clone + 'a>(
        &self,
        retry: M,
        build: impl FnOnce() -> Element<'a, M>,
    ) -> Element<'a, M> {
        self.supervise(build, |caught| match self.scope {
            CrashScope::Route => route_view(caught, retry.clone()),
            CrashScope::Application => application_view(caught, retry.clone()),
        })
    }
}

/// Route-level crash surface: shown in place of the failing screen.
pub fn route_view<'a, M: Clone + 'a>(failure: &RenderFailure, retry: M) -> Element<'a, M> {
    surface_view(
        ROUTE_TITLE,
        display_message(failure, ROUTE_GENERIC_MESSAGE),
        ROUTE_RETRY_LABEL,
        retry,
    )
}

/// Application-level crash surface: shown in place of the entire view.
pub fn application_view<'a, M: Clone + 'a>(failure: &RenderFailure, retry: M) -> Element<'a, M> {
    surface_view(
        APPLICATION_TITLE,
        display_message(failure, APPLICATION_GENERIC_MESSAGE),
        APPLICATION_RETRY_LABEL,
        retry,
    )
}

/// Picks the failure's message, or the generic fallback when it has none.
fn display_message(failure: &RenderFailure, generic: &str) -> String {
    if failure.message().trim().is_empty() {
        generic.to_string()
    } else {
        failure.message().to_string()
    }
}

/// Shared card layout of both crash surfaces.
///
/// Built from static text only; nothing in here can itself fail to render.
/// The retry button is the single focusable widget, so a `focus_next` task
/// issued when the guard trips lands keyboard focus on it.
fn surface_view<'a, M: Clone + 'a>(
    title: &'a str,
    message: String,
    retry_label: &'a str,
    retry: M,
) -> Element<'a, M> {
    let card = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(
            Text::new(message)
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            button(Text::new(retry_label).size(typography::BODY))
                .on_press(retry)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        );

    let card = Container::new(card)
        .width(Length::Fixed(sizing::CRASH_CARD_WIDTH))
        .padding(spacing::XL)
        .style(card_style);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

/// Style function for the crash card.
fn card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback_text(failure: &RenderFailure) -> String {
        format!("surface: {}", failure.message())
    }

    #[test]
    fn healthy_guard_passes_output_through() {
        let guard = CrashGuard::new(CrashScope::Route);
        let output = guard.supervise(|| "screen".to_string(), fallback_text);
        assert_eq!(output, "screen");
        assert!(!guard.is_tripped());
    }

    #[test]
    fn trip_latches_and_logs_once() {
        let log = DiagnosticsLog::with_capacity(8);
        let mut guard = CrashGuard::new(CrashScope::Route);
        guard.set_diagnostics(log.clone());

        let output = guard.supervise(|| -> String { panic!("route build failed") }, fallback_text);
        assert_eq!(output, "surface: route build failed");
        assert!(guard.is_tripped());
        assert_eq!(log.len(), 1);

        // Re-rendering while tripped reuses the latch without logging again.
        let output = guard.supervise(|| "never runs".to_string(), fallback_text);
        assert_eq!(output, "surface: route build failed");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn reset_re_attempts_the_build() {
        let mut guard = CrashGuard::new(CrashScope::Application);
        guard.supervise(|| -> String { panic!("shell failed") }, fallback_text);
        assert!(guard.is_tripped());

        guard.reset();
        let output = guard.supervise(|| "shell".to_string(), fallback_text);
        assert_eq!(output, "shell");
        assert!(!guard.is_tripped());
    }

    #[test]
    fn reset_after_persistent_failure_trips_again() {
        let log = DiagnosticsLog::with_capacity(8);
        let mut guard = CrashGuard::new(CrashScope::Route);
        guard.set_diagnostics(log.clone());

        guard.supervise(|| -> String { panic!("still broken") }, fallback_text);
        guard.reset();
        guard.supervise(|| -> String { panic!("still broken") }, fallback_text);

        assert!(guard.is_tripped());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn empty_failure_message_falls_back_to_generic_text() {
        let failure = RenderFailure::new("");
        assert_eq!(
            display_message(&failure, ROUTE_GENERIC_MESSAGE),
            ROUTE_GENERIC_MESSAGE
        );

        let failure = RenderFailure::new("specific");
        assert_eq!(display_message(&failure, ROUTE_GENERIC_MESSAGE), "specific");
    }
}
