// SPDX-License-Identifier: MPL-2.0
//! Card state: every user-editable field of the thumbnail, plus the closed
//! enumerations backing the technology badges and the accent palette.

use crate::media::{self, ImageData};
use iced::Color;
use std::collections::HashSet;

/// Default background color of the preview backdrop (`#f0f0f0`).
pub const DEFAULT_BACKGROUND: Color = Color::from_rgb(0.941, 0.941, 0.941);

/// Accent applied to badges when no palette swatch has been picked.
pub const DEFAULT_ACCENT: Color = Color::BLACK;

/// Technologies a card can advertise. The set is closed and ordered; the
/// badge row iterates it in this declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technology {
    React,
    Typescript,
    Tailwind,
    Next,
    Node,
    Firebase,
    Graphql,
    MongoDb,
    Postgres,
    Redis,
}

impl Technology {
    /// All technologies in badge display order.
    pub const ALL: [Technology; 10] = [
        Technology::React,
        Technology::Typescript,
        Technology::Tailwind,
        Technology::Next,
        Technology::Node,
        Technology::Firebase,
        Technology::Graphql,
        Technology::MongoDb,
        Technology::Postgres,
        Technology::Redis,
    ];

    /// Capitalized display name used for both checkboxes and badges.
    pub fn label(self) -> &'static str {
        match self {
            Technology::React => "React",
            Technology::Typescript => "Typescript",
            Technology::Tailwind => "Tailwind",
            Technology::Next => "Next",
            Technology::Node => "Node",
            Technology::Firebase => "Firebase",
            Technology::Graphql => "Graphql",
            Technology::MongoDb => "MongoDB",
            Technology::Postgres => "Postgres",
            Technology::Redis => "Redis",
        }
    }
}

/// Which technologies are currently enabled on the card.
#[derive(Debug, Clone)]
pub struct TechStack {
    enabled: HashSet<Technology>,
}

impl Default for TechStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TechStack {
    /// A fresh card advertises React only.
    pub fn new() -> Self {
        Self {
            enabled: HashSet::from([Technology::React]),
        }
    }

    pub fn is_enabled(&self, tech: Technology) -> bool {
        self.enabled.contains(&tech)
    }

    /// Flips a single entry, leaving every other entry unchanged.
    pub fn toggle(&mut self, tech: Technology) {
        if !self.enabled.remove(&tech) {
            self.enabled.insert(tech);
        }
    }

    /// Enabled technologies in declaration order.
    pub fn active(&self) -> impl Iterator<Item = Technology> + '_ {
        Technology::ALL
            .into_iter()
            .filter(move |tech| self.enabled.contains(tech))
    }
}

/// The fixed accent palette offered by the swatch grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentColor {
    Blue,
    Yellow,
    Green,
    Red,
    Purple,
    Ink,
}

impl AccentColor {
    /// All swatches in grid order (two rows of three).
    pub const ALL: [AccentColor; 6] = [
        AccentColor::Blue,
        AccentColor::Yellow,
        AccentColor::Green,
        AccentColor::Red,
        AccentColor::Purple,
        AccentColor::Ink,
    ];

    /// The swatch's literal color value.
    pub fn color(self) -> Color {
        match self {
            AccentColor::Blue => Color::from_rgb8(0x19, 0x53, 0xFF),
            AccentColor::Yellow => Color::from_rgb8(0xFF, 0xDA, 0x24),
            AccentColor::Green => Color::from_rgb8(0x32, 0xCD, 0x32),
            AccentColor::Red => Color::from_rgb8(0xFF, 0x45, 0x00),
            AccentColor::Purple => Color::from_rgb8(0x80, 0x00, 0x80),
            AccentColor::Ink => Color::from_rgb8(0x0F, 0x0F, 0x0F),
        }
    }
}

/// The editable card record. Created with defaults when the editor mounts
/// and dropped with it; nothing here outlives the session.
#[derive(Debug, Clone)]
pub struct CardState {
    background: Color,
    image: Option<ImageData>,
    title: String,
    subtitle: String,
    tech: TechStack,
    accent: Option<AccentColor>,
}

impl Default for CardState {
    fn default() -> Self {
        Self::new()
    }
}

impl CardState {
    pub fn new() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            image: None,
            title: "React Hooks".to_string(),
            subtitle: "Powerful state management".to_string(),
            tech: TechStack::new(),
            accent: None,
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    /// Installs a freshly decoded image, dropping (and thereby releasing)
    /// any previously held one.
    pub fn set_image(&mut self, image: ImageData) {
        self.image = Some(image);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn set_subtitle(&mut self, subtitle: String) {
        self.subtitle = subtitle;
    }

    pub fn tech(&self) -> &TechStack {
        &self.tech
    }

    pub fn toggle_tech(&mut self, tech: Technology) {
        self.tech.toggle(tech);
    }

    pub fn accent(&self) -> Option<AccentColor> {
        self.accent
    }

    pub fn set_accent(&mut self, accent: AccentColor) {
        self.accent = Some(accent);
    }

    /// The concrete color badges are filled with.
    pub fn accent_color(&self) -> Color {
        self.accent.map(AccentColor::color).unwrap_or(DEFAULT_ACCENT)
    }
}

/// Editor component state: the card plus the generated placeholder shown
/// before the first upload.
#[derive(Debug, Clone)]
pub struct State {
    card: CardState,
    placeholder: ImageData,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub fn new() -> Self {
        Self {
            card: CardState::new(),
            placeholder: media::image::placeholder(),
        }
    }

    pub fn card(&self) -> &CardState {
        &self.card
    }

    pub fn card_mut(&mut self) -> &mut CardState {
        &mut self.card
    }

    /// The image the preview renders: the uploaded one, or the built-in
    /// placeholder until a file has been chosen.
    pub fn preview_image(&self) -> &ImageData {
        self.card.image().unwrap_or(&self.placeholder)
    }
}
