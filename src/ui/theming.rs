// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use serde::{Deserialize, Serialize};

/// User-selectable theme mode. `System` follows the OS preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// All modes in the order they appear in the settings screen.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// i18n key for the mode's display label.
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "settings-theme-light",
            ThemeMode::Dark => "settings-theme-dark",
            ThemeMode::System => "settings-theme-system",
        }
    }

    /// Resolves the mode to a concrete Iced theme, consulting the OS for
    /// `System`. Detection failures fall back to dark.
    pub fn resolve(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
            ThemeMode::System => {
                if let Ok(dark_light::Mode::Light) = dark_light::detect() {
                    iced::Theme::Light
                } else {
                    iced::Theme::Dark
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_to_matching_themes() {
        assert_eq!(ThemeMode::Light.resolve(), iced::Theme::Light);
        assert_eq!(ThemeMode::Dark.resolve(), iced::Theme::Dark);
    }

    #[test]
    fn serde_round_trip_uses_kebab_case() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([("mode", ThemeMode::System)]))
            .expect("serialize");
        assert!(toml.contains("\"system\""));
        let parsed: std::collections::BTreeMap<String, ThemeMode> =
            toml::from_str(&toml).expect("deserialize");
        assert_eq!(parsed["mode"], ThemeMode::System);
    }

    #[test]
    fn default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }
}
