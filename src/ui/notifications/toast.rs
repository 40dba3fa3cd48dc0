// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering reported errors.
//!
//! Toasts are the visual representation of error records, appearing as small
//! cards with a red accent border, the message, and the pretty-printed
//! metadata block when the record carries one.

use super::record::ErrorRecord;
use super::store::{Message, NotificationStore};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};

/// Assistive label for the close affordance.
pub const DISMISS_LABEL: &str = "Close error notification";

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single error toast.
    pub fn view(record: &ErrorRecord) -> Element<'_, Message> {
        let heading = Text::new("Error")
            .size(typography::BODY)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            })
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::ERROR_500),
            });

        let message = Text::new(record.message().to_string()).size(typography::BODY);

        let mut body = Column::new()
            .spacing(spacing::XXS)
            .push(heading)
            .push(message);

        if let Some(pretty) = record.metadata_pretty() {
            body = body.push(
                Container::new(
                    Text::new(pretty)
                        .size(typography::CAPTION)
                        .font(Font::MONOSPACE),
                )
                .padding(spacing::XXS)
                .width(Length::Fill)
                .style(metadata_block_style),
            );
        }

        let record_id = record.id();
        let dismiss_button = tooltip(
            button(text("\u{2715}").size(typography::BODY_SM))
                .on_press(Message::Dismiss(record_id))
                .padding(spacing::XXS)
                .style(dismiss_button_style),
            Container::new(Text::new(DISMISS_LABEL).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(tooltip_style),
            tooltip::Position::Bottom,
        );

        // Layout: [heading + message + metadata] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(Container::new(body).width(Length::Fill))
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(toast_container_style)
            .into()
    }

    /// Renders the toast overlay with all live records, newest on top.
    ///
    /// Stacks toasts in the top-right corner without blocking the rest of the
    /// page. Callers mount this only when the store holds records.
    pub fn view_overlay(store: &NotificationStore) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = store.errors().map(Self::view).collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Style function for the toast card.
fn toast_container_style(theme: &Theme) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: palette::ERROR_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the metadata block.
fn metadata_block_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style function for the tooltip bubble on the close affordance.
fn tooltip_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.strong.color,
        )),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_error_accent() {
        let theme = Theme::Dark;
        let style = toast_container_style(&theme);

        assert_eq!(style.border.color, palette::ERROR_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_label_names_the_action() {
        assert_eq!(DISMISS_LABEL, "Close error notification");
    }
}
