// SPDX-License-Identifier: MPL-2.0
//! Deck screen component encapsulating state and update logic.
//!
//! Follows the Elm-style "state down, messages up" pattern: the component
//! owns the swipe controller and the image cache, translates messages into
//! controller calls, and reports side effects the application layer must
//! perform (currently only re-dispatching the feed fetch).

use crate::deck::SwipeController;
use crate::error::Error;
use crate::feed::{fetch, FeedBatch, ImageCache};
use crate::i18n::fluent::I18n;
use crate::ui::stack::canvas::{CardFace, DeckCanvas};
use crate::ui::stack::{empty_state, error_state, loading};
use crate::ui::state::swipe::{SwipeConfig, SwipeThreshold};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::Canvas;
use iced::widget::image;
use iced::{Element, Length, Subscription, Task};
use std::time::{Duration, Instant};

/// Animation frame interval while a fling or snap-back is playing.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Upper bound on a single animation step. Protects the animations from one
/// giant delta after the event loop stalls (e.g. window was unfocused).
const MAX_TICK_DELTA: Duration = Duration::from_millis(100);

/// Messages emitted by deck-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    FeedLoaded(Result<FeedBatch, Error>),
    /// Retry after a failed load (user pressed the retry button).
    RetryRequested,
    /// Put the whole deck back in play (user pressed "Get more!").
    RestartRequested,
    GestureStarted,
    GestureMoved { dx: f32, dy: f32 },
    GestureEnded,
    AnimationTick(Instant),
    ImageFetched {
        id: u64,
        result: Result<image::Handle, Error>,
    },
    ViewportResized { width: f32 },
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Dispatch the one-shot feed fetch; the app owns the endpoint.
    RequestFeed,
}

/// Whether the feed has arrived yet.
#[derive(Debug, Clone, Default)]
enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

/// Context required to render the deck screen.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
}

/// Deck screen state.
pub struct State {
    controller: SwipeController,
    images: ImageCache,
    load: LoadState,
    last_tick: Option<Instant>,
}

impl State {
    /// Builds the screen from resolved configuration values.
    #[must_use]
    pub fn new(config: &crate::config::Config, viewport_width: f32) -> Self {
        let swipe = SwipeConfig {
            threshold: SwipeThreshold::new(
                config
                    .swipe_threshold
                    .unwrap_or(crate::config::DEFAULT_SWIPE_THRESHOLD),
            ),
            fling_duration: Duration::from_millis(
                config
                    .fling_duration_ms
                    .unwrap_or(crate::config::DEFAULT_FLING_DURATION_MS),
            ),
            ..SwipeConfig::default()
        };
        let stack_offset = config
            .stack_offset
            .unwrap_or(crate::config::DEFAULT_STACK_OFFSET);

        Self {
            controller: SwipeController::new(swipe, stack_offset, viewport_width),
            images: ImageCache::new(),
            load: LoadState::Loading,
            last_tick: None,
        }
    }

    /// Read access for the app layer and integration tests.
    #[must_use]
    pub fn controller(&self) -> &SwipeController {
        &self.controller
    }

    /// Handle a message, returning an effect for the app plus follow-up work.
    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::FeedLoaded(Ok(batch)) => {
                if batch.skipped > 0 {
                    eprintln!("Skipped {} malformed photo records", batch.skipped);
                }
                self.controller.replace_items(batch.items);
                self.load = LoadState::Ready;
                (Effect::None, self.prefetch())
            }
            Message::FeedLoaded(Err(error)) => {
                let message = error.to_string();
                self.controller.record_fetch_error(message.clone());
                self.load = LoadState::Failed { message };
                (Effect::None, Task::none())
            }
            Message::RetryRequested => {
                self.load = LoadState::Loading;
                (Effect::RequestFeed, Task::none())
            }
            Message::RestartRequested => {
                self.controller.restart();
                (Effect::None, self.prefetch())
            }
            Message::GestureStarted => {
                self.controller.gesture_started();
                (Effect::None, Task::none())
            }
            Message::GestureMoved { dx, dy } => {
                self.controller.gesture_moved(dx, dy);
                (Effect::None, Task::none())
            }
            Message::GestureEnded => {
                self.controller.gesture_ended();
                self.last_tick = None;
                (Effect::None, Task::none())
            }
            Message::AnimationTick(now) => {
                let dt = self
                    .last_tick
                    .map_or(TICK_INTERVAL, |prev| now.duration_since(prev))
                    .min(MAX_TICK_DELTA);
                self.last_tick = Some(now);

                let resolved = self.controller.tick(dt);
                if !self.controller.is_animating() {
                    self.last_tick = None;
                }

                // A completed swipe exposes a new card at the bottom of the
                // prefetch window
                if resolved.is_some() {
                    (Effect::None, self.prefetch())
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::ImageFetched { id, result } => {
                match result {
                    Ok(handle) => self.images.insert(id, handle),
                    Err(error) => {
                        self.images.mark_failed(id);
                        eprintln!("Failed to fetch image for item {id}: {error}");
                    }
                }
                (Effect::None, Task::none())
            }
            Message::ViewportResized { width } => {
                self.controller.set_viewport_width(width);
                (Effect::None, Task::none())
            }
        }
    }

    /// Spawns fetches for the images the prefetch window still needs.
    fn prefetch(&mut self) -> Task<Message> {
        let plan = self.images.plan_prefetch(self.controller.deck());

        Task::batch(plan.into_iter().map(|item| {
            let id = item.id;
            Task::perform(fetch::fetch_image(item.url), move |result| {
                Message::ImageFetched { id, result }
            })
        }))
    }

    /// Ticks only while an animation is actually playing.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.controller.is_animating() {
            iced::time::every(TICK_INTERVAL).map(Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        match &self.load {
            LoadState::Loading => loading::view(env.i18n),
            LoadState::Failed { message } => error_state::view(env.i18n, message),
            LoadState::Ready => {
                if self.controller.is_exhausted() {
                    return empty_state::view(env.i18n);
                }

                let faces: Vec<CardFace> = self
                    .controller
                    .render_stack()
                    .into_iter()
                    .map(|transform| {
                        let title = self
                            .controller
                            .deck()
                            .peek(transform.z_order)
                            .map(|item| item.title.clone())
                            .unwrap_or_default();

                        CardFace {
                            transform,
                            title,
                            image: self.images.peek(transform.item_id).cloned(),
                        }
                    })
                    .collect();

                Canvas::new(DeckCanvas::new(
                    faces,
                    env.scheme,
                    env.i18n.tr("card-body"),
                    env.i18n.tr("card-action"),
                ))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::feed::PhotoItem;

    const WIDTH: f32 = 400.0;

    fn photo(id: u64) -> PhotoItem {
        PhotoItem {
            id,
            title: format!("photo {id}"),
            url: format!("https://example.com/{id}.png"),
            thumbnail_url: None,
        }
    }

    fn loaded_state(n: u64) -> State {
        let mut state = State::new(&Config::default(), WIDTH);
        let batch = FeedBatch {
            items: (1..=n).map(photo).collect(),
            skipped: 0,
        };
        state.handle_message(Message::FeedLoaded(Ok(batch)));
        state
    }

    #[test]
    fn feed_success_populates_the_deck() {
        let state = loaded_state(5);
        assert_eq!(state.controller().deck().len(), 5);
        assert_eq!(state.controller().deck().cursor(), 0);
        assert!(state.controller().fetch_error().is_none());
    }

    #[test]
    fn feed_failure_records_the_error_and_keeps_the_deck_empty() {
        let mut state = State::new(&Config::default(), WIDTH);
        let (effect, _) = state.handle_message(Message::FeedLoaded(Err(Error::Fetch(
            "connection refused".to_string(),
        ))));

        assert_eq!(effect, Effect::None);
        assert_eq!(state.controller().deck().len(), 0);
        assert_eq!(state.controller().deck().cursor(), 0);
        let recorded = state.controller().fetch_error().unwrap();
        assert!(recorded.contains("connection refused"));
    }

    #[test]
    fn retry_requests_a_new_fetch_from_the_app() {
        let mut state = State::new(&Config::default(), WIDTH);
        state.handle_message(Message::FeedLoaded(Err(Error::Fetch("boom".to_string()))));

        let (effect, _) = state.handle_message(Message::RetryRequested);
        assert_eq!(effect, Effect::RequestFeed);
    }

    #[test]
    fn gesture_sequence_commits_through_ticks() {
        let mut state = loaded_state(3);

        state.handle_message(Message::GestureStarted);
        state.handle_message(Message::GestureMoved {
            dx: 0.5 * WIDTH,
            dy: 0.0,
        });
        state.handle_message(Message::GestureEnded);
        assert!(state.controller().is_animating());

        let mut now = Instant::now();
        for _ in 0..1000 {
            if !state.controller().is_animating() {
                break;
            }
            now += Duration::from_millis(16);
            state.handle_message(Message::AnimationTick(now));
        }

        assert!(!state.controller().is_animating());
        assert_eq!(state.controller().deck().cursor(), 1);
    }

    #[test]
    fn restart_rewinds_the_deck() {
        let mut state = loaded_state(1);

        state.handle_message(Message::GestureStarted);
        state.handle_message(Message::GestureMoved {
            dx: WIDTH,
            dy: 0.0,
        });
        state.handle_message(Message::GestureEnded);
        let mut now = Instant::now();
        while state.controller().is_animating() {
            now += Duration::from_millis(16);
            state.handle_message(Message::AnimationTick(now));
        }
        assert!(state.controller().is_exhausted());

        state.handle_message(Message::RestartRequested);
        assert!(!state.controller().is_exhausted());
        assert_eq!(state.controller().deck().cursor(), 0);
    }

    #[test]
    fn viewport_resize_reaches_the_controller() {
        let mut state = loaded_state(1);
        state.handle_message(Message::ViewportResized { width: 800.0 });

        // Threshold now scales with the new width: a 150 px drag is below
        // 0.25 * 800 and must cancel
        state.handle_message(Message::GestureStarted);
        state.handle_message(Message::GestureMoved { dx: 150.0, dy: 0.0 });
        state.handle_message(Message::GestureEnded);

        let mut now = Instant::now();
        while state.controller().is_animating() {
            now += Duration::from_millis(16);
            state.handle_message(Message::AnimationTick(now));
        }
        assert_eq!(state.controller().deck().cursor(), 0);
    }
}
