// SPDX-License-Identifier: MPL-2.0
//! Exhausted-deck view.
//!
//! Shown once every card has been swiped away. Offers a single action:
//! put the whole deck back in play.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::stack::component::Message;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the exhausted state.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("deck-empty-title")).size(typography::TITLE_LG);

    let body = Text::new(i18n.tr("deck-empty-body")).size(typography::BODY);

    let more_button = button(Text::new(i18n.tr("deck-empty-button")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::RestartRequested);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(body)
        .push(more_button);

    Container::new(
        Container::new(content)
            .padding(spacing::XL)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
