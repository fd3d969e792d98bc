// SPDX-License-Identifier: MPL-2.0
//! About screen displaying application information.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, container, scrollable, text, Column};
use iced::{alignment::Horizontal, Element, Length};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToEditor,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    BackToEditor,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToEditor => Event::BackToEditor,
    }
}

/// Render the about screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("about-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToEditor);

    let title = text(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);

    let app_line = text(format!(
        "{} - {} {}",
        ctx.i18n.tr("window-title"),
        ctx.i18n.tr("about-version-label"),
        APP_VERSION
    ))
    .size(typography::BODY_LG);

    let description = text(ctx.i18n.tr("about-description")).size(typography::BODY);

    let license = text(ctx.i18n.tr("about-license-notice"))
        .size(typography::BODY_SM)
        .color(theme::muted_text_color());

    let card = container(
        Column::new()
            .spacing(spacing::SM)
            .push(app_line)
            .push(description)
            .push(license),
    )
    .padding(spacing::MD)
    .style(styles::container::panel);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(back_button)
        .push(title)
        .push(card);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
