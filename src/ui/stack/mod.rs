// SPDX-License-Identifier: MPL-2.0
//! The deck screen: card stack, gesture handling, and its satellite views.

pub mod canvas;
pub mod component;
pub mod empty_state;
pub mod error_state;
pub mod loading;

pub use component::{Effect, Message, State};
