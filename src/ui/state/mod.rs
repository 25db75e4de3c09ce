// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the gesture and animation state logic separated from
//! the widget tree, following the principle of separation of concerns.

pub mod drag;
pub mod rotation;
pub mod swipe;
pub mod timing;

// Re-export commonly used types for convenience
pub use drag::DragOffset;
pub use rotation::RotationMap;
pub use swipe::{SwipeConfig, SwipeDirection, SwipeEvent, SwipeMachine, SwipeThreshold};
