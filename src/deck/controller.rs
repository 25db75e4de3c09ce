// SPDX-License-Identifier: MPL-2.0
//! The swipe controller: glue between the gesture machine and the deck.
//!
//! Owns the deck, the gesture state machine, and the host callbacks, and
//! exposes the rendering contract — a pure mapping from current state to one
//! transform per visible card. The controller is UI-toolkit agnostic and
//! fully exercisable from tests without a window.

use crate::deck::Deck;
use crate::feed::item::PhotoItem;
use crate::ui::state::rotation::RotationMap;
use crate::ui::state::swipe::{SwipeConfig, SwipeDirection, SwipeEvent, SwipeMachine};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

/// Host hook invoked with the swiped-away item.
pub type SwipeCallback = Box<dyn FnMut(&PhotoItem) + Send>;

/// Host hooks for resolved swipes. Both default to no-ops.
///
/// Dispatch is fire-and-forget: a panicking hook is caught and logged, and
/// never blocks cursor advancement or offset reset.
#[derive(Default)]
pub struct SwipeCallbacks {
    on_swipe_left: Option<SwipeCallback>,
    on_swipe_right: Option<SwipeCallback>,
}

impl SwipeCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_swipe_left(mut self, callback: SwipeCallback) -> Self {
        self.on_swipe_left = Some(callback);
        self
    }

    #[must_use]
    pub fn on_swipe_right(mut self, callback: SwipeCallback) -> Self {
        self.on_swipe_right = Some(callback);
        self
    }

    fn dispatch(&mut self, direction: SwipeDirection, item: &PhotoItem) {
        let callback = match direction {
            SwipeDirection::Left => self.on_swipe_left.as_mut(),
            SwipeDirection::Right => self.on_swipe_right.as_mut(),
        };

        if let Some(callback) = callback {
            if catch_unwind(AssertUnwindSafe(|| callback(item))).is_err() {
                eprintln!("Swipe callback panicked for item {}", item.id);
            }
        }
    }
}

impl fmt::Debug for SwipeCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeCallbacks")
            .field("on_swipe_left", &self.on_swipe_left.is_some())
            .field("on_swipe_right", &self.on_swipe_right.is_some())
            .finish()
    }
}

/// Where a visible card should be drawn.
///
/// `z_order` is the card's distance from the top of the stack; 0 is the
/// interactive top card, higher values sit underneath.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub item_id: u64,
    pub offset_x: f32,
    pub offset_y: f32,
    pub rotation_deg: f32,
    pub z_order: usize,
}

/// Drives the deck from gesture events and animation ticks.
#[derive(Debug)]
pub struct SwipeController {
    deck: Deck,
    machine: SwipeMachine,
    callbacks: SwipeCallbacks,
    viewport_width: f32,
    /// Vertical offset per card below the top of the stack.
    stack_offset: f32,
    /// Message from the last failed feed load, for the host to display.
    fetch_error: Option<String>,
}

impl SwipeController {
    #[must_use]
    pub fn new(config: SwipeConfig, stack_offset: f32, viewport_width: f32) -> Self {
        Self {
            deck: Deck::new(),
            machine: SwipeMachine::new(config),
            callbacks: SwipeCallbacks::new(),
            viewport_width: viewport_width.max(1.0),
            stack_offset,
            fetch_error: None,
        }
    }

    /// Installs host hooks, replacing any previous ones.
    pub fn set_callbacks(&mut self, callbacks: SwipeCallbacks) {
        self.callbacks = callbacks;
    }

    /// Tracks window resizes so thresholds and fling targets stay
    /// proportional to the visible width.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width.max(1.0);
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Message from the last failed feed load, if any.
    #[must_use]
    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    /// Installs a freshly fetched sequence; the cursor returns to the start
    /// and any previous fetch error is cleared.
    pub fn replace_items(&mut self, items: Vec<PhotoItem>) {
        self.deck.replace(items);
        self.fetch_error = None;
    }

    /// Records a failed feed load. Deck and cursor are deliberately left
    /// untouched; the message is purely informational to the host.
    pub fn record_fetch_error(&mut self, message: impl Into<String>) {
        self.fetch_error = Some(message.into());
    }

    /// True when every card has been swiped away (or none were loaded).
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_exhausted()
    }

    /// Puts every card back in play. The host's exhausted-state action.
    pub fn restart(&mut self) {
        self.deck.restart();
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.machine.is_animating()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.machine.is_dragging()
    }

    /// Forwards a gesture start. Ignored while an animation plays or when
    /// there is no card to grab.
    pub fn gesture_started(&mut self) {
        if !self.deck.is_exhausted() {
            self.machine.grab();
        }
    }

    /// Forwards a gesture move; raw deltas, no smoothing.
    pub fn gesture_moved(&mut self, dx: f32, dy: f32) {
        self.machine.drag_to(dx, dy);
    }

    /// Forwards a gesture end; the machine picks commit or cancel.
    pub fn gesture_ended(&mut self) {
        self.machine.release(self.viewport_width);
    }

    /// Advances an in-flight animation. When a fly-out completes, the top
    /// card is removed from play and the matching host hook fires with it.
    ///
    /// Bookkeeping (cursor, offset reset) happens before the hook runs, so a
    /// panicking host cannot stall the deck.
    pub fn tick(&mut self, dt: Duration) -> Option<SwipeEvent> {
        let event = self.machine.tick(dt)?;

        if let SwipeEvent::Committed(direction) = event {
            if let Some(item) = self.deck.advance() {
                self.callbacks.dispatch(direction, &item);
            }
        }

        Some(event)
    }

    /// Maps the current state to one transform per visible card, top first.
    ///
    /// The top card carries the live drag/animation offset and the derived
    /// rotation; cards underneath sit at a static vertical offset
    /// proportional to their distance from the top, unrotated and inert.
    /// Cards already swiped away are absent.
    #[must_use]
    pub fn render_stack(&self) -> Vec<CardTransform> {
        let rotation = RotationMap::new(self.viewport_width);
        let offset = self.machine.offset();
        let mut stack = Vec::with_capacity(self.deck.remaining());

        for distance in 0.. {
            let Some(item) = self.deck.peek(distance) else {
                break;
            };

            stack.push(if distance == 0 {
                CardTransform {
                    item_id: item.id,
                    offset_x: offset.dx,
                    offset_y: offset.dy,
                    rotation_deg: rotation.degrees_for(offset.dx),
                    z_order: 0,
                }
            } else {
                CardTransform {
                    item_id: item.id,
                    offset_x: 0.0,
                    offset_y: self.stack_offset * distance as f32,
                    rotation_deg: 0.0,
                    z_order: distance,
                }
            });
        }

        stack
    }
}
