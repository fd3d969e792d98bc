// SPDX-License-Identifier: MPL-2.0
//! Update logic for the card editor.

use super::messages::{Channel, Event, Message};
use super::state::State;

/// Process an editor message and return the corresponding event. Every
/// mutation is synchronous; the only side effect escaping the component is
/// the request to open the image dialog.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TitleChanged(title) => {
            state.card_mut().set_title(title);
            Event::None
        }
        Message::SubtitleChanged(subtitle) => {
            state.card_mut().set_subtitle(subtitle);
            Event::None
        }
        Message::BackgroundChanged(channel, value) => {
            let mut color = state.card().background();
            let value = value / 255.0;
            match channel {
                Channel::Red => color.r = value,
                Channel::Green => color.g = value,
                Channel::Blue => color.b = value,
            }
            state.card_mut().set_background(color);
            Event::None
        }
        Message::AccentSelected(accent) => {
            state.card_mut().set_accent(accent);
            Event::None
        }
        Message::TechToggled(tech) => {
            state.card_mut().toggle_tech(tech);
            Event::None
        }
        Message::PickImage => Event::PickImage,
    }
}
