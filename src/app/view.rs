// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::editor::{self, ViewContext as EditorViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use iced::{widget::Column, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub editor: &'a editor::State,
    pub theme_mode: ThemeMode,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.screen {
        Screen::Editor => view_editor(ctx.editor, ctx.i18n),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Settings),
        Screen::About => about::view(AboutViewContext { i18n: ctx.i18n }).map(Message::About),
    }
}

fn view_editor<'a>(editor: &'a editor::State, i18n: &'a I18n) -> Element<'a, Message> {
    let navbar_view = navbar::view(NavbarViewContext { i18n }).map(Message::Navbar);

    let editor_view = editor::view(EditorViewContext {
        i18n,
        state: editor,
    })
    .map(Message::Editor);

    Column::new()
        .push(navbar_view)
        .push(editor_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
