// SPDX-License-Identifier: MPL-2.0
//! Fetch-error view.
//!
//! Displays the error message from a failed feed load with a retry button.
//! Retry simply re-dispatches the one-shot fetch; there is no automatic
//! retry policy.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::stack::component::Message;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the error state with the displayable message from the loader.
pub fn view<'a>(i18n: &'a I18n, message: &'a str) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("deck-error-title"))
        .size(typography::TITLE)
        .color(palette::ERROR_500);

    let details = Text::new(message).size(typography::BODY);

    let retry_button = button(Text::new(i18n.tr("deck-error-retry")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::secondary)
        .on_press(Message::RetryRequested);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(details)
        .push(retry_button);

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
