// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

use iced::Theme;
use iced_card::ui::design_tokens::{opacity, palette, radius, sizing, spacing};
use iced_card::ui::editor::AccentColor;
use iced_card::ui::styles::{button, container};
use iced_card::ui::theme;
use iced_card::ui::theming::ThemeMode;

#[test]
fn all_button_styles_compile() {
    let theme = Theme::Dark;

    // Smoke-test all button styles compile and are callable
    let _ = button::primary(&theme, iced::widget::button::Status::Active);
    let _ = button::swatch(palette::PRIMARY_500, true)(&theme, iced::widget::button::Status::Hovered);
    let _ = button::swatch(palette::PRIMARY_500, false)(&theme, iced::widget::button::Status::Active);
}

#[test]
fn design_tokens_are_accessible() {
    // Palette
    let _ = palette::PRIMARY_500;
    let _ = palette::WHITE;

    // Spacing
    let _ = spacing::MD;

    // Opacity
    let _ = opacity::OVERLAY_STRONG;

    // Sizing
    let _ = sizing::PREVIEW_WIDTH;
}

#[test]
fn theme_modes_resolve_to_concrete_themes() {
    assert_eq!(ThemeMode::Light.resolve(), Theme::Light);
    assert_eq!(ThemeMode::Dark.resolve(), Theme::Dark);
    // System resolves to whichever the OS reports; it must be one of the two.
    let resolved = ThemeMode::System.resolve();
    assert!(resolved == Theme::Light || resolved == Theme::Dark);
}

#[test]
fn badge_pill_is_filled_with_the_accent_color() {
    let theme = Theme::Light;

    for accent in AccentColor::ALL {
        let style = container::pill(accent.color())(&theme);
        match style.background {
            Some(iced::Background::Color(color)) => assert_eq!(color, accent.color()),
            other => panic!("expected a solid fill, got {:?}", other),
        }
        assert_eq!(style.border.radius, radius::FULL.into());
    }
}

#[test]
fn caption_overlay_uses_a_gradient_fill() {
    let theme = Theme::Light;
    let style = container::caption_overlay(&theme);
    assert!(matches!(
        style.background,
        Some(iced::Background::Gradient(_))
    ));
}

#[test]
fn hex_readout_matches_the_accent_palette_literals() {
    let expected = ["#1953FF", "#FFDA24", "#32CD32", "#FF4500", "#800080", "#0F0F0F"];
    for (accent, hex) in AccentColor::ALL.into_iter().zip(expected) {
        assert_eq!(theme::hex(accent.color()), hex);
    }
}
