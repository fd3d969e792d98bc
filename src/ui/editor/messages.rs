// SPDX-License-Identifier: MPL-2.0
//! Editor message and event types re-exported by the facade.

use super::state::{AccentColor, Technology};

/// Color channel edited by one of the background sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Messages emitted by the control panel widgets.
#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    SubtitleChanged(String),
    /// One background slider moved; the value is the raw 0-255 position.
    BackgroundChanged(Channel, f32),
    AccentSelected(AccentColor),
    TechToggled(Technology),
    /// The upload button was pressed; the file dialog is an app-level task.
    PickImage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    PickImage,
}
