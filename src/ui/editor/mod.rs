// SPDX-License-Identifier: MPL-2.0
//! Card editor component: a live preview driven by a small form.
//!
//! Follows the Elm-style split used across the application: `State` holds
//! the card record, `update` applies control-panel messages, and `view`
//! re-derives the whole screen (preview included) from current state.

mod component;
mod messages;
mod state;
mod view;

#[cfg(test)]
mod tests;

pub use component::update;
pub use messages::{Channel, Event, Message};
pub use state::{
    AccentColor, CardState, State, TechStack, Technology, DEFAULT_ACCENT, DEFAULT_BACKGROUND,
};
pub use view::view;

use crate::i18n::fluent::I18n;

/// Contextual data needed to render the editor screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}
