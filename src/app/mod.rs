// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the editor and the
//! auxiliary screens.
//!
//! The `App` struct wires together the domains (editor, localization,
//! preferences) and translates messages into side effects like config
//! persistence or image decoding. Policy decisions (window sizing,
//! persistence format, localization switching) stay close to the main
//! update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::editor;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 860;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    editor: editor::State,
    theme_mode: ThemeMode,
    /// Loaded preferences, re-saved whenever the user changes one.
    config: Config,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_image", &self.editor.card().image().is_some())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            editor: editor::State::new(),
            theme_mode: ThemeMode::default(),
            config: Config::default(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state from persisted preferences and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            editor: &self.editor,
            theme_mode: self.theme_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_on_the_editor_screen() {
        let (app, _task) = App::new(Flags::default());
        assert_eq!(app.screen, Screen::Editor);
        assert!(app.editor.card().image().is_none());
    }

    #[test]
    fn window_settings_enforce_a_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size should be set");
        assert!(min.width <= settings.size.width);
        assert!(min.height <= settings.size.height);
    }

    #[test]
    fn debug_output_stays_compact() {
        let app = App::default();
        let rendered = format!("{:?}", app);
        assert!(rendered.contains("screen"));
        assert!(rendered.contains("has_image"));
    }
}
