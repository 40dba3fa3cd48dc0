// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen based on application state. Supervision (the
//! route and application crash guards, the toast overlay) is composed one
//! level up in `App::view`; this module only knows how to draw screens.

use super::message::Message;
use super::screen::Screen;
use crate::lesson_scanner::LessonList;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::home;
use crate::ui::lesson;
use iced::widget::{Container, Text};
use iced::{Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub lessons: &'a LessonList,
    pub lesson: Option<&'a lesson::State>,
    pub lesson_dir: Option<&'a Path>,
}

/// Renders the current screen.
pub fn screen(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.screen {
        Screen::Home => home::view(home::ViewContext {
            lessons: ctx.lessons,
            lesson_dir: ctx.lesson_dir,
        })
        .map(Message::Home),
        Screen::Lesson => view_lesson(ctx.lesson),
    }
}

fn view_lesson(state: Option<&lesson::State>) -> Element<'_, Message> {
    if let Some(state) = state {
        lesson::view(state).map(Message::Lesson)
    } else {
        // Fallback if the lesson state is missing
        Container::new(Text::new("No lesson is open.").size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .into()
    }
}
