// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the editor and app chrome.

use crate::ui::design_tokens::{
    opacity,
    palette::{GRAY_400, GRAY_900, WHITE},
};
use iced::widget::container;
use iced::{Color, Theme};

/// Background color used by the navbar.
pub fn navbar_background() -> Color {
    GRAY_900
}

/// Text color used on the navbar surface.
pub fn navbar_text_color() -> Color {
    WHITE
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    GRAY_400
}

/// Color of the card title drawn over the caption gradient.
pub fn caption_title_color() -> Color {
    WHITE
}

/// Color of the card subtitle drawn over the caption gradient.
pub fn caption_subtitle_color() -> Color {
    Color {
        a: opacity::TEXT_MUTED,
        ..WHITE
    }
}

/// Style for the surface the preview card sits on. The color is the
/// user-picked background field, so the control has a visible effect.
pub fn preview_backdrop_style(background_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(background_color)),
        ..Default::default()
    }
}

/// Uppercase hex rendition of a color, e.g. `#1953FF`.
pub fn hex(color: Color) -> String {
    let [r, g, b, _] = color.into_rgba8();
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}
