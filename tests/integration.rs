// SPDX-License-Identifier: MPL-2.0
//! Integration tests exercising the editor through its public message flow.

use iced_card::media::ImageData;
use iced_card::ui::editor::{
    self, AccentColor, Channel, Event, Message, State, Technology, DEFAULT_ACCENT,
};

#[test]
fn typing_a_title_updates_only_the_title() {
    let mut state = State::new();
    let subtitle_before = state.card().subtitle().to_string();
    let accent_before = state.card().accent();
    let badges_before: Vec<Technology> = state.card().tech().active().collect();

    editor::update(
        &mut state,
        Message::TitleChanged("Hooks Deep Dive".to_string()),
    );

    assert_eq!(state.card().title(), "Hooks Deep Dive");
    assert_eq!(state.card().subtitle(), subtitle_before);
    assert_eq!(state.card().accent(), accent_before);
    let badges_after: Vec<Technology> = state.card().tech().active().collect();
    assert_eq!(badges_after, badges_before);
    assert!(state.card().image().is_none());
}

#[test]
fn text_fields_round_trip_every_value_including_empty() {
    let mut state = State::new();

    for value in ["", "a", "Powerful state management", "émoji ✨"] {
        editor::update(&mut state, Message::TitleChanged(value.to_string()));
        editor::update(&mut state, Message::SubtitleChanged(value.to_string()));
        assert_eq!(state.card().title(), value);
        assert_eq!(state.card().subtitle(), value);
    }
}

#[test]
fn badge_row_matches_the_enabled_set_in_declaration_order() {
    let mut state = State::new();
    // Default: only React.
    let labels: Vec<&str> = state.card().tech().active().map(Technology::label).collect();
    assert_eq!(labels, ["React"]);

    editor::update(&mut state, Message::TechToggled(Technology::Typescript));
    let labels: Vec<&str> = state.card().tech().active().map(Technology::label).collect();
    assert_eq!(labels, ["React", "Typescript"]);

    // Enabling an earlier-declared technology later keeps declaration order.
    editor::update(&mut state, Message::TechToggled(Technology::Redis));
    editor::update(&mut state, Message::TechToggled(Technology::Tailwind));
    let labels: Vec<&str> = state.card().tech().active().map(Technology::label).collect();
    assert_eq!(labels, ["React", "Typescript", "Tailwind", "Redis"]);
}

#[test]
fn disabling_everything_empties_the_badge_row() {
    let mut state = State::new();
    for tech in Technology::ALL {
        if state.card().tech().is_enabled(tech) {
            editor::update(&mut state, Message::TechToggled(tech));
        }
    }
    assert_eq!(state.card().tech().active().count(), 0);
}

#[test]
fn swatch_click_sets_exactly_that_accent() {
    let mut state = State::new();
    assert_eq!(state.card().accent_color(), DEFAULT_ACCENT);

    for accent in AccentColor::ALL {
        editor::update(&mut state, Message::AccentSelected(accent));
        assert_eq!(state.card().accent(), Some(accent));
        assert_eq!(state.card().accent_color(), accent.color());
    }
}

#[test]
fn preview_shows_placeholder_until_an_upload_replaces_it() {
    let mut state = State::new();
    let placeholder_width = state.preview_image().width;

    // First upload replaces the placeholder.
    state
        .card_mut()
        .set_image(ImageData::from_rgba(8, 8, vec![0xAA; 8 * 8 * 4]));
    assert_eq!(state.preview_image().width, 8);
    assert_ne!(state.preview_image().width, placeholder_width);

    // A second upload replaces the first, not the placeholder.
    state
        .card_mut()
        .set_image(ImageData::from_rgba(16, 16, vec![0x55; 16 * 16 * 4]));
    assert_eq!(state.preview_image().width, 16);
}

#[test]
fn upload_button_defers_to_the_application() {
    let mut state = State::new();
    let event = editor::update(&mut state, Message::PickImage);
    assert!(matches!(event, Event::PickImage));
    // Nothing changes until the dialog result comes back.
    assert!(state.card().image().is_none());
}

#[test]
fn background_sliders_compose_into_one_color() {
    let mut state = State::new();
    editor::update(&mut state, Message::BackgroundChanged(Channel::Red, 0x12 as f32));
    editor::update(
        &mut state,
        Message::BackgroundChanged(Channel::Green, 0x34 as f32),
    );
    editor::update(
        &mut state,
        Message::BackgroundChanged(Channel::Blue, 0x56 as f32),
    );

    let color = state.card().background();
    assert_eq!(color.into_rgba8(), [0x12, 0x34, 0x56, 0xFF]);
}

#[test]
fn example_end_to_end_scenario() {
    // Initial state: title "React Hooks", subtitle "Powerful state
    // management", only the React badge, default accent.
    let mut state = State::new();
    assert_eq!(state.card().title(), "React Hooks");
    assert_eq!(state.card().subtitle(), "Powerful state management");
    let labels: Vec<&str> = state.card().tech().active().map(Technology::label).collect();
    assert_eq!(labels, ["React"]);
    assert_eq!(state.card().accent(), None);

    let subtitle_before = state.card().subtitle().to_string();
    let background_before = state.card().background();

    // The user types a new title.
    editor::update(
        &mut state,
        Message::TitleChanged("Hooks Deep Dive".to_string()),
    );

    // The preview title follows; nothing else moved.
    assert_eq!(state.card().title(), "Hooks Deep Dive");
    assert_eq!(state.card().subtitle(), subtitle_before);
    assert_eq!(state.card().background(), background_before);
    assert_eq!(state.card().accent(), None);
    assert!(state.card().image().is_none());
    let labels: Vec<&str> = state.card().tech().active().map(Technology::label).collect();
    assert_eq!(labels, ["React"]);
}
