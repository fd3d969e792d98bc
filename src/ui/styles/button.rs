// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Color, Theme};

/// Style for the primary action button (image upload).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: iced::Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: iced::Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Circular color swatch. The fill is the swatch's literal color; the border
/// marks hover and the currently selected accent.
pub fn swatch(color: Color, selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (border_color, border_width) = match (selected, status) {
            (true, _) => (palette::PRIMARY_500, border::WIDTH_MD),
            (false, button::Status::Hovered) => (palette::GRAY_400, border::WIDTH_MD),
            (false, _) => (palette::GRAY_200, border::WIDTH_SM),
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: iced::Border {
                color: border_color,
                width: border_width,
                radius: radius::FULL.into(),
            },
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::SM
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}
