// SPDX-License-Identifier: MPL-2.0
//! Fetch-in-flight view.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::stack::component::Message;
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

/// Renders the loading state shown while the initial fetch is in flight.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("deck-loading")).size(typography::TITLE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
