// SPDX-License-Identifier: MPL-2.0
//! Home screen: the lesson catalog.

use crate::lesson_scanner::LessonList;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Text};
use iced::{alignment, Element, Length};
use std::path::Path;

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the lesson at this catalog index.
    Open(usize),
    /// Re-scan the lesson directory.
    Rescan,
}

/// Context required to render the home screen.
pub struct ViewContext<'a> {
    pub lessons: &'a LessonList,
    pub lesson_dir: Option<&'a Path>,
}

/// Renders the lesson catalog.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new("Lessons").size(typography::TITLE_LG));

    if let Some(dir) = ctx.lesson_dir {
        content = content.push(Text::new(format!("from {}", dir.display())).size(typography::BODY_SM));
    }

    if ctx.lessons.is_empty() {
        content = content
            .push(Text::new("No lessons found.").size(typography::BODY))
            .push(
                button(Text::new("Scan again").size(typography::BODY))
                    .on_press(Message::Rescan)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary),
            );
    } else {
        let mut list = Column::new().spacing(spacing::XXS);
        for (index, lesson) in ctx.lessons.iter().enumerate() {
            list = list.push(
                button(Text::new(lesson.title().to_string()).size(typography::BODY))
                    .on_press(Message::Open(index))
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(styles::button::list_entry),
            );
        }
        content = content.push(scrollable(list).height(Length::Fill));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Left)
        .into()
}
