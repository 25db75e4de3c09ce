// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window events to top-level messages. Gesture events are not
//! handled here — the deck canvas captures its own mouse input — so the only
//! native event the application cares about is the window resize.

use super::Message;
use iced::{event, Subscription};

/// Creates the native event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}
