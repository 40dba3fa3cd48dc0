// SPDX-License-Identifier: MPL-2.0
//! Lesson screen: one lesson's text content.
//!
//! The body is rendered inside a [`RenderBoundary`], so a failure while
//! building it replaces only the body with the fallback card; the header and
//! the rest of the application keep rendering. Opening another lesson builds
//! a fresh `State`, which remounts the boundary.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::supervision::RenderBoundary;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::path::PathBuf;

/// Messages emitted by the lesson screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Return to the catalog.
    Back,
}

/// State of the currently open lesson.
#[derive(Debug)]
pub struct State {
    title: String,
    path: PathBuf,
    body: String,
    boundary: RenderBoundary,
}

impl State {
    /// Creates the screen state for a freshly loaded lesson.
    pub fn new(title: impl Into<String>, path: PathBuf, body: String) -> Self {
        Self {
            title: title.into(),
            path,
            body,
            boundary: RenderBoundary::new(),
        }
    }

    /// Returns the lesson's display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the lesson file's path.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the body's fault-isolation boundary.
    #[must_use]
    pub fn boundary(&self) -> &RenderBoundary {
        &self.boundary
    }
}

/// Renders the open lesson.
pub fn view(state: &State) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            button(Text::new("Back").size(typography::BODY))
                .on_press(Message::Back)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::list_entry),
        )
        .push(Text::new(state.title.clone()).size(typography::TITLE_MD));

    let body = state
        .boundary
        .view(|| scrollable(body_view(&state.body)).height(Length::Fill).into());

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XL)
    .into()
}

/// Builds the lesson body as a column of paragraphs.
fn body_view(body: &str) -> Element<'_, Message> {
    let mut paragraphs = Column::new().spacing(spacing::SM);
    for paragraph in body.split("\n\n").filter(|p| !p.trim().is_empty()) {
        paragraphs = paragraphs.push(Text::new(paragraph.trim().to_string()).size(typography::BODY));
    }
    paragraphs.into()
}
