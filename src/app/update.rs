// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::feed::fetch;
use crate::ui::stack;
use iced::Task;

/// Dispatches the one-shot feed fetch.
///
/// The result flows back through the deck component; a failure surfaces as
/// the error screen, never as a crash or a retry loop.
pub fn request_feed(endpoint: String) -> Task<Message> {
    Task::perform(fetch::fetch_photos(endpoint), |result| {
        Message::Stack(stack::Message::FeedLoaded(result))
    })
}

/// Handles a top-level message.
pub fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Stack(message) => {
            let (effect, task) = app.stack.handle_message(message);
            let task = task.map(Message::Stack);

            match effect {
                stack::Effect::None => task,
                stack::Effect::RequestFeed => {
                    Task::batch([task, request_feed(app.endpoint.clone())])
                }
            }
        }
        Message::WindowResized(size) => {
            let (_, task) = app
                .stack
                .handle_message(stack::Message::ViewportResized { width: size.width });
            task.map(Message::Stack)
        }
    }
}
