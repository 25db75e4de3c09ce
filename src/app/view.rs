// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::stack::component::ViewEnv;
use iced::widget::Container;
use iced::{Element, Length};

/// Renders the application: a single screen, the deck.
pub fn view(app: &App) -> Element<'_, Message> {
    let deck = app
        .stack
        .view(ViewEnv {
            i18n: &app.i18n,
            scheme: app.theme_mode.scheme(),
        })
        .map(Message::Stack);

    Container::new(deck)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
