// SPDX-License-Identifier: MPL-2.0
//! Settings screen: UI language selection and theme mode.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{alignment::Horizontal, Element, Length};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    BackToEditor,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    BackToEditor,
}

/// Process a settings message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeSelected(mode),
        Message::BackToEditor => Event::BackToEditor,
    }
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("settings-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToEditor);

    let title = text(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(back_button)
        .push(title)
        .push(language_section(&ctx))
        .push(theme_section(&ctx));

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("select-language-label")).size(typography::BODY_LG));

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Prefer a translated language name, e.g. "language-name-en-US".
        let translated_name = ctx.i18n.tr(&format!("language-name-{}", locale));
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let style = if ctx.i18n.current_locale() == locale {
            button::primary
        } else {
            button::secondary
        };

        column = column.push(
            button(text(button_text).size(typography::BODY))
                .style(style)
                .on_press(Message::LanguageSelected(locale.clone())),
        );
    }

    container(column)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn theme_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for mode in ThemeMode::ALL {
        let style = if ctx.theme_mode == mode {
            button::primary
        } else {
            button::secondary
        };
        row = row.push(
            button(text(ctx.i18n.tr(mode.label_key())).size(typography::BODY))
                .style(style)
                .on_press(Message::ThemeModeSelected(mode)),
        );
    }

    container(
        Column::new()
            .spacing(spacing::XS)
            .push(text(ctx.i18n.tr("settings-theme-label")).size(typography::BODY_LG))
            .push(row),
    )
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_is_a_straight_mapping() {
        assert!(matches!(
            update(Message::BackToEditor),
            Event::BackToEditor
        ));
        assert!(matches!(
            update(Message::ThemeModeSelected(ThemeMode::Dark)),
            Event::ThemeModeSelected(ThemeMode::Dark)
        ));
        let locale: LanguageIdentifier = "fr".parse().unwrap();
        assert!(matches!(
            update(Message::LanguageSelected(locale.clone())),
            Event::LanguageSelected(l) if l == locale
        ));
    }

    #[test]
    fn view_renders_for_every_theme_mode() {
        let i18n = I18n::default();
        for mode in ThemeMode::ALL {
            let _element = view(ViewContext {
                i18n: &i18n,
                theme_mode: mode,
            });
        }
    }
}
