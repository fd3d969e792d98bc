// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::config;
use crate::media;
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::editor::{self, Event as EditorEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::settings::{self, Event as SettingsEvent};
use iced::Task;
use std::path::PathBuf;

/// Routes a top-level message to the owning component and turns component
/// events into app-level state changes or tasks.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Editor(message) => match editor::update(&mut app.editor, message) {
            EditorEvent::None => Task::none(),
            EditorEvent::PickImage => {
                open_image_dialog(app.config.editor.last_image_directory.clone())
            }
        },
        Message::Navbar(message) => {
            match navbar::update(&message) {
                NavbarEvent::OpenSettings => app.screen = Screen::Settings,
                NavbarEvent::OpenAbout => app.screen = Screen::About,
            }
            Task::none()
        }
        Message::Settings(message) => {
            handle_settings_event(app, settings::update(message));
            Task::none()
        }
        Message::About(message) => {
            match about::update(&message) {
                AboutEvent::BackToEditor => app.screen = Screen::Editor,
            }
            Task::none()
        }
        Message::ImageDialogResult(None) => {
            log::debug!("image dialog cancelled");
            Task::none()
        }
        Message::ImageDialogResult(Some(path)) => decode_image(path),
        Message::ImageDecoded { path, result } => handle_image_decoded(app, path, result),
    }
}

/// Opens the platform file dialog, seeded with the last-used directory.
/// No file-type filter is declared; undecodable picks are rejected later.
fn open_image_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new();

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::ImageDialogResult,
    )
}

/// Decodes the picked file off the update loop.
fn decode_image(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let result = media::image::load_path(&path);
            (path, result)
        },
        |(path, result)| Message::ImageDecoded { path, result },
    )
}

/// Installs a decoded image into the card (replacing any prior one) and
/// remembers the directory for the next dialog. Decode failures are
/// deliberately silent toward the user.
fn handle_image_decoded(
    app: &mut App,
    path: PathBuf,
    result: crate::error::Result<media::ImageData>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            app.editor.card_mut().set_image(image);

            if let Some(parent) = path.parent() {
                app.config.editor.last_image_directory = Some(parent.to_path_buf());
                persist_config(&app.config);
            }
        }
        Err(err) => {
            log::warn!("could not decode {}: {}", path.display(), err);
        }
    }
    Task::none()
}

fn handle_settings_event(app: &mut App, event: SettingsEvent) {
    match event {
        SettingsEvent::LanguageSelected(locale) => {
            app.i18n.set_locale(locale.clone());
            app.config.general.language = Some(locale.to_string());
            persist_config(&app.config);
        }
        SettingsEvent::ThemeModeSelected(mode) => {
            app.theme_mode = mode;
            app.config.general.theme_mode = mode;
            persist_config(&app.config);
        }
        SettingsEvent::BackToEditor => app.screen = Screen::Editor,
    }
}

fn persist_config(config: &config::Config) {
    if let Err(err) = config::save(config) {
        log::warn!("could not save settings: {}", err);
    }
}
