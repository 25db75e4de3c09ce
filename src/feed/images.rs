// SPDX-License-Identifier: MPL-2.0
//! Card image cache and prefetch planning.
//!
//! Decoded image handles are kept in an LRU cache keyed by item id, and the
//! next few upcoming cards are fetched ahead of display so the stack does not
//! pop in as the user swipes.

use crate::deck::Deck;
use crate::feed::item::PhotoItem;
use iced::widget::image;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Number of decoded images kept around.
const CACHE_CAPACITY: usize = 32;

/// How many cards from the top of the stack have their images fetched ahead
/// of display.
pub const PREFETCH_WINDOW: usize = 3;

/// LRU cache of fetched card images.
pub struct ImageCache {
    entries: LruCache<u64, image::Handle>,
    /// Ids with a fetch currently in flight, so a prefetch plan never
    /// requests the same image twice.
    in_flight: HashSet<u64>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: LruCache::new(
                NonZeroUsize::new(CACHE_CAPACITY).expect("cache capacity must be non-zero"),
            ),
            in_flight: HashSet::new(),
        }
    }

    /// Returns the cached handle for an item, refreshing its LRU position.
    pub fn get(&mut self, id: u64) -> Option<image::Handle> {
        self.entries.get(&id).cloned()
    }

    /// Returns the cached handle without touching the LRU order.
    ///
    /// Used on the render path, where `&self` access is all we have.
    #[must_use]
    pub fn peek(&self, id: u64) -> Option<&image::Handle> {
        self.entries.peek(&id)
    }

    /// Stores a fetched image and clears its in-flight marker.
    pub fn insert(&mut self, id: u64, handle: image::Handle) {
        self.in_flight.remove(&id);
        self.entries.put(id, handle);
    }

    /// Clears the in-flight marker after a failed fetch.
    ///
    /// The image is not re-requested automatically; the card simply renders
    /// its placeholder.
    pub fn mark_failed(&mut self, id: u64) {
        self.in_flight.remove(&id);
    }

    /// Returns the items within the prefetch window that still need a fetch,
    /// marking each as in flight.
    pub fn plan_prefetch(&mut self, deck: &Deck) -> Vec<PhotoItem> {
        let mut wanted = Vec::new();

        for distance in 0..PREFETCH_WINDOW {
            let Some(item) = deck.peek(distance) else {
                break;
            };
            if self.entries.contains(&item.id) || self.in_flight.contains(&item.id) {
                continue;
            }
            self.in_flight.insert(item.id);
            wanted.push(item.clone());
        }

        wanted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    fn photo(id: u64) -> PhotoItem {
        PhotoItem {
            id,
            title: format!("photo {id}"),
            url: format!("https://example.com/{id}.png"),
            thumbnail_url: None,
        }
    }

    fn handle() -> image::Handle {
        image::Handle::from_bytes(vec![0u8; 4])
    }

    fn deck_of(n: u64) -> Deck {
        let mut deck = Deck::new();
        deck.replace((1..=n).map(photo).collect());
        deck
    }

    #[test]
    fn prefetch_plans_the_top_of_the_stack() {
        let mut cache = ImageCache::new();
        let deck = deck_of(10);

        let plan = cache.plan_prefetch(&deck);
        let ids: Vec<u64> = plan.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn prefetch_does_not_request_twice() {
        let mut cache = ImageCache::new();
        let deck = deck_of(10);

        let first = cache.plan_prefetch(&deck);
        assert_eq!(first.len(), 3);
        // Nothing resolved yet, everything is in flight
        assert!(cache.plan_prefetch(&deck).is_empty());
    }

    #[test]
    fn prefetch_skips_cached_entries() {
        let mut cache = ImageCache::new();
        let deck = deck_of(10);
        cache.insert(1, handle());

        let plan = cache.plan_prefetch(&deck);
        let ids: Vec<u64> = plan.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn failed_fetch_clears_in_flight_marker() {
        let mut cache = ImageCache::new();
        let deck = deck_of(1);

        assert_eq!(cache.plan_prefetch(&deck).len(), 1);
        cache.mark_failed(1);
        // Eligible again on the next plan
        assert_eq!(cache.plan_prefetch(&deck).len(), 1);
    }

    #[test]
    fn prefetch_stops_at_deck_end() {
        let mut cache = ImageCache::new();
        let deck = deck_of(2);

        assert_eq!(cache.plan_prefetch(&deck).len(), 2);
    }

    #[test]
    fn insert_makes_the_handle_retrievable() {
        let mut cache = ImageCache::new();
        assert!(cache.get(7).is_none());
        cache.insert(7, handle());
        assert!(cache.get(7).is_some());
    }
}
