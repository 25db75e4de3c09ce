// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the deck screen, localization, and
//! persisted configuration, and translates top-level messages into side
//! effects like the feed fetch. Policy decisions (window sizing, endpoint
//! resolution order) stay close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::stack;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state bridging the deck screen, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    stack: stack::State,
    theme_mode: ThemeMode,
    /// Resolved feed endpoint: CLI flag over config over the built-in default.
    endpoint: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("endpoint", &self.endpoint)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from CLI flags and the persisted config, and
    /// dispatches the initial feed fetch.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            eprintln!("Failed to load config: {error}");
            Config::default()
        });

        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = config.theme.unwrap_or_default();
        let endpoint = flags
            .endpoint
            .clone()
            .or_else(|| config.endpoint.clone())
            .unwrap_or_else(|| config::DEFAULT_ENDPOINT.to_string());

        let stack = stack::State::new(&config, WINDOW_DEFAULT_WIDTH as f32);

        let app = Self {
            i18n,
            stack,
            theme_mode,
            endpoint,
        };
        let initial_fetch = update::request_feed(app.endpoint.clone());

        (app, initial_fetch)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            self.stack.subscription().map(Message::Stack),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::feed::{FeedBatch, PhotoItem};
    use crate::ui::stack;

    fn photo(id: u64) -> PhotoItem {
        PhotoItem {
            id,
            title: format!("photo {id}"),
            url: format!("https://example.com/{id}.png"),
            thumbnail_url: None,
        }
    }

    fn app_with_endpoint() -> App {
        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
            endpoint: Some("https://example.invalid/photos".to_string()),
        });
        app
    }

    #[test]
    fn cli_endpoint_wins_over_config() {
        let app = app_with_endpoint();
        assert_eq!(app.endpoint, "https://example.invalid/photos");
    }

    #[test]
    fn update_feed_loaded_populates_the_deck() {
        let mut app = app_with_endpoint();
        let batch = FeedBatch {
            items: vec![photo(1), photo(2)],
            skipped: 0,
        };

        let _ = app.update(Message::Stack(stack::Message::FeedLoaded(Ok(batch))));
        assert_eq!(app.stack.controller().deck().len(), 2);
    }

    #[test]
    fn update_feed_error_leaves_the_deck_empty() {
        let mut app = app_with_endpoint();

        let _ = app.update(Message::Stack(stack::Message::FeedLoaded(Err(
            Error::Fetch("boom".to_string()),
        ))));
        assert_eq!(app.stack.controller().deck().len(), 0);
        assert!(app.stack.controller().fetch_error().is_some());
    }

    #[test]
    fn window_resize_rescales_the_deck_viewport() {
        let mut app = app_with_endpoint();
        let _ = app.update(Message::WindowResized(iced::Size::new(1000.0, 700.0)));
        // No panic and no deck mutation; the threshold change itself is
        // covered by the component tests
        assert_eq!(app.stack.controller().deck().len(), 0);
    }
}
