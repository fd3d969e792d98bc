// SPDX-License-Identifier: MPL-2.0
//! Component-level tests for the card editor.

use super::*;
use crate::i18n::fluent::I18n;
use iced::Color;

#[test]
fn title_message_round_trips_into_state() {
    let mut state = State::new();
    let event = update(&mut state, Message::TitleChanged("Hooks Deep Dive".into()));
    assert!(matches!(event, Event::None));
    assert_eq!(state.card().title(), "Hooks Deep Dive");
}

#[test]
fn subtitle_message_accepts_empty_string() {
    let mut state = State::new();
    update(&mut state, Message::SubtitleChanged(String::new()));
    assert_eq!(state.card().subtitle(), "");
}

#[test]
fn background_slider_updates_only_its_channel() {
    let mut state = State::new();
    let before = state.card().background();

    update(
        &mut state,
        Message::BackgroundChanged(Channel::Red, 255.0),
    );

    let after = state.card().background();
    assert_eq!(after.r, 1.0);
    assert_eq!(after.g, before.g);
    assert_eq!(after.b, before.b);
}

#[test]
fn accent_message_selects_the_swatch_and_nothing_else() {
    let mut state = State::new();
    let title_before = state.card().title().to_string();
    let tech_before: Vec<Technology> = state.card().tech().active().collect();

    update(&mut state, Message::AccentSelected(AccentColor::Purple));

    assert_eq!(state.card().accent(), Some(AccentColor::Purple));
    assert_eq!(
        state.card().accent_color(),
        Color::from_rgb8(0x80, 0x00, 0x80)
    );
    assert_eq!(state.card().title(), title_before);
    let tech_after: Vec<Technology> = state.card().tech().active().collect();
    assert_eq!(tech_after, tech_before);
}

#[test]
fn tech_message_flips_exactly_one_entry() {
    let mut state = State::new();
    update(&mut state, Message::TechToggled(Technology::Graphql));
    let labels: Vec<&str> = state.card().tech().active().map(Technology::label).collect();
    assert_eq!(labels, ["React", "Graphql"]);
}

#[test]
fn pick_image_emits_event_without_touching_state() {
    let mut state = State::new();
    let title_before = state.card().title().to_string();

    let event = update(&mut state, Message::PickImage);

    assert!(matches!(event, Event::PickImage));
    assert_eq!(state.card().title(), title_before);
    assert!(state.card().image().is_none());
}

#[test]
fn view_renders_for_default_state() {
    let state = State::new();
    let i18n = I18n::default();
    let _element = view(ViewContext {
        i18n: &i18n,
        state: &state,
    });
    // Smoke test to ensure the screen builds without panicking.
}

#[test]
fn view_renders_with_all_badges_enabled() {
    let mut state = State::new();
    for tech in Technology::ALL {
        if !state.card().tech().is_enabled(tech) {
            update(&mut state, Message::TechToggled(tech));
        }
    }
    let i18n = I18n::default();
    let _element = view(ViewContext {
        i18n: &i18n,
        state: &state,
    });
}
