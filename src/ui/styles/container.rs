// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{gradient, Background, Border, Color, Radians, Theme};

/// Generic panel surface used for the control panel and settings sections.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bottom-anchored caption overlay for the preview card: a linear gradient
/// from fully transparent at the top to half-opaque black at the bottom,
/// so title and subtitle stay legible over any image.
pub fn caption_overlay(_theme: &Theme) -> container::Style {
    let gradient = gradient::Linear::new(Radians(std::f32::consts::PI))
        .add_stop(0.0, Color::TRANSPARENT)
        .add_stop(
            1.0,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        );

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Rounded pill used for technology badges, filled with the accent color.
pub fn pill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Static square swatch showing the current background color next to the
/// channel sliders.
pub fn color_well(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}
