// SPDX-License-Identifier: MPL-2.0
//! Editor screen layout: heading, live preview, control panel.

mod controls;
mod preview;

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{scrollable, text, Column};
use iced::{font::Weight, Element, Font, Length};

use super::{Message, ViewContext};

/// Render the card editor screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = text(ctx.i18n.tr("editor-heading"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(heading)
        .push(preview::view(ctx.state))
        .push(controls::view(ctx.state.card(), &ctx));

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
