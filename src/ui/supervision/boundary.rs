// SPDX-License-Identifier: MPL-2.0
//! Render failure boundary.
//!
//! A `RenderBoundary` isolates one subtree: while healthy it runs the
//! subtree's view builder, and if the builder panics it latches the failure
//! and substitutes a static fallback card from then on. The boundary is
//! terminal once failed; recovery means replacing the boundary value itself
//! (a remount), which the owning screen does when it is rebuilt.
//!
//! The boundary is intentionally decoupled from the notification store: a
//! trip produces no toast and no diagnostics entry.

use super::failure::{self, RenderFailure};
use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use iced::widget::{container, Column, Container, Text};
use iced::{Element, Length, Theme};
use std::cell::RefCell;

/// Fault-isolation wrapper around a single child subtree.
///
/// The failure latch uses interior mutability because trips happen during
/// the render pass, where the framework hands out shared references. The UI
/// framework serializes update/view cycles on one thread, so the latch is
/// never contended.
#[derive(Debug, Default)]
pub struct RenderBoundary {
    failure: RefCell<Option<RenderFailure>>,
}

impl RenderBoundary {
    /// Creates a healthy boundary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the boundary has latched a failure.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.failure.borrow().is_some()
    }

    /// Returns the latched failure, if any.
    #[must_use]
    pub fn failure(&self) -> Option<RenderFailure> {
        self.failure.borrow().clone()
    }

    /// Supervises a build: healthy boundaries run the builder, failed ones
    /// substitute `fallback` without invoking it.
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
            Err(failure) => {
                let output = fallback(&failure);
                *self.failure.borrow_mut() = Some(failure);
                output
            }
        }
    }

    /// Supervises an Iced view builder, substituting the standard fallback card.
    pub fn view<'a, M: 'a>(&self, build: impl FnOnce() -> Element<'a, M>) -> Element<'a, M> {
        self.supervise(build, |failure| fallback_view(failure))
    }
}

/// The static fallback shown in place of a failed subtree.
fn fallback_view<'a, M: 'a>(failure: &RenderFailure) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new("Component failed to render.").size(typography::BODY))
        .push(
            Text::new(failure.message().to_string())
                .size(typography::BODY_SM)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(fallback_container_style)
        .into()
}

/// Style function for the fallback card.
fn fallback_container_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback_text(failure: &RenderFailure) -> String {
        format!("fallback: {}", failure.message())
    }

    #[test]
    fn healthy_boundary_passes_builder_output_through() {
        let boundary = RenderBoundary::new();
        let output = boundary.supervise(|| "content".to_string(), fallback_text);
        assert_eq!(output, "content");
        assert!(!boundary.is_failed());
    }

    #[test]
    fn panic_latches_failure_and_substitutes_fallback() {
        let boundary = RenderBoundary::new();
        let output = boundary.supervise(|| -> String { panic!("subtree broke") }, fallback_text);

        assert_eq!(output, "fallback: subtree broke");
        assert!(boundary.is_failed());
        assert_eq!(
            boundary.failure().map(|f| f.message().to_string()),
            Some("subtree broke".to_string())
        );
    }

    #[test]
    fn failed_boundary_never_reruns_the_builder() {
        let boundary = RenderBoundary::new();
        boundary.supervise(|| -> String { panic!("first") }, fallback_text);

        let mut builder_ran = false;
        let output = boundary.supervise(
            || {
                builder_ran = true;
                "healthy again".to_string()
            },
            fallback_text,
        );

        assert!(!builder_ran);
        assert_eq!(output, "fallback: first");
    }

    #[test]
    fn remounting_recovers() {
        let mut boundary = RenderBoundary::new();
        boundary.supervise(|| -> String { panic!("gone") }, fallback_text);
        assert!(boundary.is_failed());

        // A remount is a fresh boundary value.
        boundary = RenderBoundary::new();
        let output = boundary.supervise(|| "content".to_string(), fallback_text);
        assert_eq!(output, "content");
        assert!(!boundary.is_failed());
    }
}
