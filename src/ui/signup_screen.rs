// SPDX-License-Identifier: MPL-2.0
//! Placeholder account creation screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    font::Weight,
    widget::{button, container, text, Column, Text},
    Element, Font, Length,
};

#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

#[derive(Debug, Clone)]
pub enum Event {
    Back,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Back => Event::Back,
    }
}

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let back = button(text(format!("‹ {}", i18n.tr("back-button"))).size(typography::BODY))
        .style(styles::button::link)
        .on_press(Message::Back);

    let title = Text::new(i18n.tr("signup-screen-title"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let body = text(i18n.tr("signup-screen-body"))
        .size(typography::BODY_LG)
        .color(palette::GRAY_600);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(back)
        .push(title)
        .push(body);

    container(content).width(Length::Fill).into()
}
