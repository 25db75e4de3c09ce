// SPDX-License-Identifier: MPL-2.0
//! Animation timing primitives.
//!
//! The gesture machine drives two kinds of motion: a fixed-duration fling
//! (card flying off screen) and a damped spring (card snapping back to rest).
//! Both are advanced by discrete ticks from the application's animation
//! subscription; neither blocks or owns a timer of its own.

use std::fmt;
use std::time::Duration;

/// Progress curve for timed animations.
///
/// Implementations map linear progress `t` in `[0, 1]` to eased progress.
/// The fling animation samples its curve once per tick, so a curve must be
/// cheap and stateless.
pub trait EasingCurve: fmt::Debug + Send {
    fn sample(&self, t: f32) -> f32;
}

/// Identity curve: progress advances uniformly over the duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl EasingCurve for Linear {
    fn sample(&self, t: f32) -> f32 {
        t
    }
}

/// Fixed-duration animation clock.
#[derive(Debug, Clone)]
pub struct FlingTimer {
    duration: Duration,
    elapsed: Duration,
}

impl FlingTimer {
    /// Creates a clock that completes after `duration`.
    ///
    /// A zero duration completes on the first tick.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advances the clock by a frame delta.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Returns true once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Spring stiffness and damping constants.
///
/// The defaults settle a 200 px displacement in roughly a third of a second
/// without visible oscillation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.0,
        }
    }
}

/// Displacement below which a spring counts as settled, in pixels.
const SETTLE_DISTANCE: f32 = 0.5;
/// Velocity below which a spring counts as settled, in pixels per second.
const SETTLE_VELOCITY: f32 = 0.5;
/// Integration substep; ticks larger than this are split to keep the
/// integrator stable.
const MAX_SUBSTEP_SECS: f32 = 0.008;

/// Damped spring pulling a scalar displacement back to zero.
///
/// Integrated with semi-implicit Euler, substepped so irregular frame deltas
/// cannot blow up the simulation.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    params: SpringParams,
    position: f32,
    velocity: f32,
}

impl Spring {
    /// Creates a spring released from `position` with zero initial velocity.
    #[must_use]
    pub fn new(params: SpringParams, position: f32) -> Self {
        Self {
            params,
            position,
            velocity: 0.0,
        }
    }

    /// Advances the simulation by a frame delta.
    pub fn step(&mut self, dt: Duration) {
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECS);
            let accel = -self.params.stiffness * self.position - self.params.damping * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }

    /// Current displacement.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.position
    }

    /// Returns true once the displacement and velocity are negligible.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.position.abs() < SETTLE_DISTANCE && self.velocity.abs() < SETTLE_VELOCITY
    }
}
