// SPDX-License-Identifier: MPL-2.0
//! `iced_swipe` is a Tinder-style swipeable photo card deck built with the
//! Iced GUI framework.
//!
//! It fetches a photo feed once, presents it as a stack of cards, and lets
//! the user dismiss cards with left/right drag gestures — committed drags
//! fling the card off screen, short drags spring back. The gesture machine
//! and deck bookkeeping live in [`ui::state`] and [`deck`] and are fully
//! testable without a window.

#![doc(html_root_url = "https://docs.rs/iced_swipe/0.2.0")]

pub mod app;
pub mod config;
pub mod deck;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
