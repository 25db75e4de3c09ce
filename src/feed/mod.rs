// SPDX-License-Identifier: MPL-2.0
//! Photo feed: the remote data source the deck is populated from.
//!
//! The feed is fetched exactly once per deck load — there is no retry,
//! backoff, or offline cache. A failed fetch surfaces a displayable error
//! message and leaves the deck untouched.

pub mod fetch;
pub mod images;
pub mod item;

pub use fetch::FeedBatch;
pub use images::ImageCache;
pub use item::PhotoItem;
