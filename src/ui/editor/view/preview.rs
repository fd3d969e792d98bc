// SPDX-License-Identifier: MPL-2.0
//! Live card preview: a pure function of the card state.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{container, image, text, Column, Row, Stack};
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    ContentFit, Element, Font, Length,
};

use super::super::{Message, State};

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

/// Renders the 16:9 card: image (or placeholder) under a bottom-anchored
/// caption gradient carrying title, subtitle, and the badge row, all sitting
/// on a backdrop filled with the user-picked background color.
pub fn view(state: &State) -> Element<'_, Message> {
    let card = state.card();

    let image_layer = image(state.preview_image().handle.clone())
        .content_fit(ContentFit::Cover)
        .width(Length::Fixed(sizing::PREVIEW_WIDTH))
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT));

    let title = text(card.title().to_string())
        .size(typography::TITLE_LG)
        .font(bold())
        .color(theme::caption_title_color());

    let subtitle = text(card.subtitle().to_string())
        .size(typography::TITLE_SM)
        .color(theme::caption_subtitle_color());

    let mut badges = Row::new().spacing(spacing::XS);
    for tech in card.tech().active() {
        badges = badges.push(
            container(text(tech.label()).size(typography::BODY_SM).font(bold()))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::pill(card.accent_color())),
        );
    }

    let caption = container(
        Column::new()
            .spacing(spacing::XS)
            .push(title)
            .push(subtitle)
            .push(badges),
    )
    .width(Length::Fixed(sizing::PREVIEW_WIDTH))
    .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
    .align_y(Vertical::Bottom)
    .padding(spacing::LG)
    .style(styles::container::caption_overlay);

    let stacked_card = Stack::new()
        .width(Length::Fixed(sizing::PREVIEW_WIDTH))
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .push(image_layer)
        .push(caption);

    container(stacked_card)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .style(theme::preview_backdrop_style(card.background()))
        .into()
}
