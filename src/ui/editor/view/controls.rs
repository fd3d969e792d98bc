// SPDX-License-Identifier: MPL-2.0
//! Control panel: one thin two-way binding per card field.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, checkbox, container, slider, text, text_input, Column, Row, Space};
use iced::{Element, Length};

use super::super::state::{AccentColor, CardState, Technology};
use super::super::{Channel, Message, ViewContext};

/// Checkbox columns in the tech-stack grid.
const TECH_GRID_COLUMNS: usize = 3;
/// Swatch columns in the accent grid (two rows of three).
const ACCENT_GRID_COLUMNS: usize = 3;

pub fn view<'a>(card: &'a CardState, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let top_row = Row::new()
        .spacing(spacing::XL)
        .push(background_section(card, ctx))
        .push(Space::new().width(Length::Fill))
        .push(accent_section(card, ctx));

    let column = Column::new()
        .spacing(spacing::MD)
        .push(top_row)
        .push(labeled_input(
            ctx.i18n.tr("editor-title-label"),
            ctx.i18n.tr("editor-title-placeholder"),
            card.title(),
            Message::TitleChanged,
        ))
        .push(labeled_input(
            ctx.i18n.tr("editor-subtitle-label"),
            ctx.i18n.tr("editor-subtitle-placeholder"),
            card.subtitle(),
            Message::SubtitleChanged,
        ))
        .push(tech_section(card, ctx));

    container(column)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Background color picker (RGB sliders + live well) and the upload trigger.
fn background_section<'a>(card: &'a CardState, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let color = card.background();

    let channel_slider = |channel: Channel, value: f32| {
        slider(0.0..=255.0, value * 255.0, move |v| {
            Message::BackgroundChanged(channel, v)
        })
        .step(1.0)
        .width(Length::Fixed(sizing::CHANNEL_SLIDER_WIDTH))
    };

    let well = container(
        Space::new()
            .width(Length::Fixed(sizing::SWATCH))
            .height(Length::Fixed(sizing::SWATCH)),
    )
    .style(styles::container::color_well(color));

    let readout = text(theme::hex(color))
        .size(typography::BODY_SM)
        .color(theme::muted_text_color());

    let sliders = Column::new()
        .spacing(spacing::XXS)
        .push(channel_slider(Channel::Red, color.r))
        .push(channel_slider(Channel::Green, color.g))
        .push(channel_slider(Channel::Blue, color.b));

    let upload_button = button(
        text(ctx.i18n.tr("editor-upload-image-button")).size(typography::BODY),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary)
    .on_press(Message::PickImage);

    Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("editor-background-label")).size(typography::BODY))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(well)
                .push(sliders)
                .push(
                    Column::new()
                        .spacing(spacing::XS)
                        .push(readout)
                        .push(upload_button),
                ),
        )
        .into()
}

/// Fixed 2x3 grid of accent swatches.
fn accent_section<'a>(card: &'a CardState, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::XS);

    for row_swatches in AccentColor::ALL.chunks(ACCENT_GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::XS);
        for &accent in row_swatches {
            let selected = card.accent() == Some(accent);
            row = row.push(
                button(
                    Space::new()
                        .width(Length::Fixed(sizing::SWATCH))
                        .height(Length::Fixed(sizing::SWATCH)),
                )
                .padding(0.0)
                .style(styles::button::swatch(accent.color(), selected))
                .on_press(Message::AccentSelected(accent)),
            );
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("editor-theme-color-label")).size(typography::BODY))
        .push(grid)
        .into()
}

/// One checkbox per technology, three to a row.
fn tech_section<'a>(card: &'a CardState, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::XS);

    for row_techs in Technology::ALL.chunks(TECH_GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::XS);
        for &tech in row_techs {
            row = row.push(
                checkbox(card.tech().is_enabled(tech))
                    .label(tech.label())
                    .on_toggle(move |_| Message::TechToggled(tech))
                    .width(Length::Fill),
            );
        }
        // Pad the last row so the columns stay aligned.
        for _ in row_techs.len()..TECH_GRID_COLUMNS {
            row = row.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("editor-tech-stack-label")).size(typography::BODY))
        .push(grid)
        .into()
}

/// A labeled text field bound directly to one card field.
fn labeled_input<'a>(
    label: String,
    placeholder: String,
    value: &str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    let input = text_input(placeholder.as_str(), value)
        .on_input(on_input)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);

    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY))
        .push(input)
        .into()
}
