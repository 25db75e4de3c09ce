// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state machine.
//!
//! Interprets a continuous card drag and resolves it into one of two
//! outcomes: a commit (card flies off screen left or right) or a cancel
//! (card springs back to rest). The machine owns the drag offset for the
//! whole lifetime of a gesture, including the resolution animations, and is
//! advanced by discrete ticks — it never blocks and has no timer of its own.
//!
//! Phases:
//!
//! ```text
//! Idle ──grab──► Dragging ──release, |dx| > threshold──► Committing ──┐
//!   ▲               │                                                │
//!   │               └──release, otherwise──► Resetting ──┐           │
//!   └────────────────────────────────────────────────────┴───────────┘
//!                         (animation completion)
//! ```
//!
//! Gesture events arriving while an animation plays are ignored; a new
//! gesture can only start from `Idle`.

use crate::config::{
    DEFAULT_FLING_DURATION_MS, DEFAULT_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD, MIN_SWIPE_THRESHOLD,
};
use crate::ui::state::drag::DragOffset;
use crate::ui::state::timing::{EasingCurve, FlingTimer, Linear, Spring, SpringParams};
use std::fmt;
use std::time::Duration;

/// Swipe threshold as a fraction of the viewport width, guaranteed to be
/// within the supported range.
///
/// This newtype enforces validity at the type level, so persisted configs
/// cannot request a threshold of zero (every tap commits) or beyond the
/// window (nothing ever commits).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold fraction, clamping to the valid range.
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        Self(fraction.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn fraction(self) -> f32 {
        self.0
    }

    /// Returns the threshold in pixels for a viewport width.
    #[must_use]
    pub fn distance(self, viewport_width: f32) -> f32 {
        self.0 * viewport_width
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

/// Direction of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Sign of the direction on the x axis.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// Immutable gesture knobs, fixed when the machine is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal distance a drag must exceed to commit.
    pub threshold: SwipeThreshold,
    /// Duration of the fly-out animation.
    pub fling_duration: Duration,
    /// Spring constants for the snap-back animation.
    pub spring: SpringParams,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: SwipeThreshold::default(),
            fling_duration: Duration::from_millis(DEFAULT_FLING_DURATION_MS),
            spring: SpringParams::default(),
        }
    }
}

/// Outcome surfaced by [`SwipeMachine::tick`] when an animation finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeEvent {
    /// The fly-out finished; the card is gone in the given direction.
    Committed(SwipeDirection),
    /// The snap-back finished; the card is back at rest.
    Settled,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Dragging,
    Committing {
        direction: SwipeDirection,
        from: DragOffset,
        target: DragOffset,
        timer: FlingTimer,
    },
    Resetting {
        x: Spring,
        y: Spring,
    },
}

/// The swipe gesture state machine.
pub struct SwipeMachine {
    config: SwipeConfig,
    curve: Box<dyn EasingCurve>,
    phase: Phase,
    offset: DragOffset,
}

impl fmt::Debug for SwipeMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeMachine")
            .field("phase", &self.phase)
            .field("offset", &self.offset)
            .finish()
    }
}

impl Default for SwipeMachine {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl SwipeMachine {
    /// Creates a machine with a linear fling curve.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self::with_curve(config, Box::new(Linear))
    }

    /// Creates a machine with a custom fling easing curve.
    #[must_use]
    pub fn with_curve(config: SwipeConfig, curve: Box<dyn EasingCurve>) -> Self {
        Self {
            config,
            curve,
            phase: Phase::Idle,
            offset: DragOffset::ZERO,
        }
    }

    /// Current drag/animation offset of the top card.
    #[must_use]
    pub fn offset(&self) -> DragOffset {
        self.offset
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging)
    }

    /// Returns true while a fly-out or snap-back animation is playing.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Committing { .. } | Phase::Resetting { .. })
    }

    /// Starts a gesture. Returns false if the machine is not at rest, in
    /// which case the event is ignored.
    pub fn grab(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = Phase::Dragging;
        self.offset = DragOffset::ZERO;
        true
    }

    /// Tracks a gesture move. The offset is the raw pointer delta since
    /// gesture start; no smoothing is applied. Ignored outside `Dragging`.
    pub fn drag_to(&mut self, dx: f32, dy: f32) {
        if self.is_dragging() {
            self.offset = DragOffset::new(dx, dy);
        }
    }

    /// Resolves a gesture end against the viewport width.
    ///
    /// A drag strictly beyond the threshold commits in the direction of its
    /// sign; a drag exactly at the threshold snaps back (the comparison is
    /// strict by design). Returns the direction when a commit begins.
    /// Ignored outside `Dragging`.
    pub fn release(&mut self, viewport_width: f32) -> Option<SwipeDirection> {
        if !self.is_dragging() {
            return None;
        }

        let threshold = self.config.threshold.distance(viewport_width);
        let direction = if self.offset.dx > threshold {
            Some(SwipeDirection::Right)
        } else if self.offset.dx < -threshold {
            Some(SwipeDirection::Left)
        } else {
            None
        };

        match direction {
            Some(direction) => {
                self.phase = Phase::Committing {
                    direction,
                    from: self.offset,
                    target: DragOffset::new(direction.sign() * viewport_width, 0.0),
                    timer: FlingTimer::new(self.config.fling_duration),
                };
            }
            None => {
                self.phase = Phase::Resetting {
                    x: Spring::new(self.config.spring, self.offset.dx),
                    y: Spring::new(self.config.spring, self.offset.dy),
                };
            }
        }

        direction
    }

    /// Advances an in-flight animation by a frame delta.
    ///
    /// Returns the terminal event when an animation completes; the machine is
    /// back at `Idle` with a zero offset afterwards.
    pub fn tick(&mut self, dt: Duration) -> Option<SwipeEvent> {
        match &mut self.phase {
            Phase::Committing {
                direction,
                from,
                target,
                timer,
            } => {
                timer.advance(dt);
                let eased = self.curve.sample(timer.progress());
                self.offset = from.lerp(*target, eased);

                if timer.is_finished() {
                    let direction = *direction;
                    self.phase = Phase::Idle;
                    self.offset = DragOffset::ZERO;
                    return Some(SwipeEvent::Committed(direction));
                }
                None
            }
            Phase::Resetting { x, y } => {
                x.step(dt);
                y.step(dt);
                self.offset = DragOffset::new(x.value(), y.value());

                if x.is_settled() && y.is_settled() {
                    self.phase = Phase::Idle;
                    self.offset = DragOffset::ZERO;
                    return Some(SwipeEvent::Settled);
                }
                None
            }
            Phase::Idle | Phase::Dragging => None,
        }
    }
}
