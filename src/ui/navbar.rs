// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above the editor, giving access to the Settings and
//! About screens.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theme;
use iced::widget::{button, container, text, Row, Space};
use iced::{
    alignment::Vertical, font::Weight, Background, Element, Font, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenSettings,
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenSettings,
    OpenAbout,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenSettings => Event::OpenSettings,
        Message::OpenAbout => Event::OpenAbout,
    }
}

fn bar_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::navbar_background())),
        text_color: Some(theme::navbar_text_color()),
        ..Default::default()
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let app_name = text(ctx.i18n.tr("window-title"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let settings_button = button(text(ctx.i18n.tr("navbar-settings-button")).size(typography::BODY))
        .style(button::secondary)
        .on_press(Message::OpenSettings);

    let about_button = button(text(ctx.i18n.tr("navbar-about-button")).size(typography::BODY))
        .style(button::secondary)
        .on_press(Message::OpenAbout);

    let bar = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(app_name)
        .push(Space::new().width(Length::Fill))
        .push(settings_button)
        .push(about_button);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(bar_style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_one_to_one_onto_events() {
        assert!(matches!(
            update(&Message::OpenSettings),
            Event::OpenSettings
        ));
        assert!(matches!(update(&Message::OpenAbout), Event::OpenAbout));
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
