// SPDX-License-Identifier: MPL-2.0
//! The card deck: an ordered photo sequence plus a cursor.
//!
//! The cursor always satisfies `0 <= cursor <= len`. `cursor == len` is the
//! exhausted terminal display state; the only way out is [`Deck::restart`]
//! or replacing the items wholesale.

pub mod controller;

pub use controller::{CardTransform, SwipeCallbacks, SwipeController};

use crate::feed::item::PhotoItem;

/// Ordered photo sequence with a cursor denoting the current top card.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    items: Vec<PhotoItem>,
    cursor: usize,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole sequence and resets the cursor to the start.
    pub fn replace(&mut self, items: Vec<PhotoItem>) {
        self.items = items;
        self.cursor = 0;
    }

    #[must_use]
    pub fn items(&self) -> &[PhotoItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current top card, if the deck is not exhausted.
    #[must_use]
    pub fn current(&self) -> Option<&PhotoItem> {
        self.items.get(self.cursor)
    }

    /// The card `distance` positions below the top (0 = top card).
    #[must_use]
    pub fn peek(&self, distance: usize) -> Option<&PhotoItem> {
        self.items.get(self.cursor.checked_add(distance)?)
    }

    /// Number of cards from the cursor to the end.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.len() - self.cursor
    }

    /// Removes the top card from play, returning it.
    ///
    /// Returns `None` when the deck is already exhausted; the cursor never
    /// moves past the end.
    pub fn advance(&mut self) -> Option<PhotoItem> {
        let item = self.items.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(item)
    }

    /// Puts every card back in play without touching the sequence.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// True when the cursor has passed the last card. An empty deck is
    /// exhausted by definition.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: u64) -> PhotoItem {
        PhotoItem {
            id,
            title: format!("photo {id}"),
            url: format!("https://example.com/{id}.png"),
            thumbnail_url: None,
        }
    }

    fn deck_of(n: u64) -> Deck {
        let mut deck = Deck::new();
        deck.replace((1..=n).map(photo).collect());
        deck
    }

    #[test]
    fn new_deck_is_exhausted_and_empty() {
        let deck = Deck::new();
        assert!(deck.is_empty());
        assert!(deck.is_exhausted());
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn replace_resets_the_cursor() {
        let mut deck = deck_of(3);
        deck.advance();
        assert_eq!(deck.cursor(), 1);

        deck.replace(vec![photo(9)]);
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.current().map(|item| item.id), Some(9));
    }

    #[test]
    fn advance_walks_the_sequence_in_order() {
        let mut deck = deck_of(3);

        assert_eq!(deck.advance().map(|item| item.id), Some(1));
        assert_eq!(deck.advance().map(|item| item.id), Some(2));
        assert_eq!(deck.advance().map(|item| item.id), Some(3));
        assert!(deck.is_exhausted());
        assert_eq!(deck.advance(), None);
        // Cursor never passes the end
        assert_eq!(deck.cursor(), 3);
    }

    #[test]
    fn restart_rewinds_without_touching_items() {
        let mut deck = deck_of(3);
        while deck.advance().is_some() {}
        assert!(deck.is_exhausted());

        deck.restart();
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.current().map(|item| item.id), Some(1));
    }

    #[test]
    fn peek_looks_below_the_top_card() {
        let mut deck = deck_of(3);
        deck.advance();

        assert_eq!(deck.peek(0).map(|item| item.id), Some(2));
        assert_eq!(deck.peek(1).map(|item| item.id), Some(3));
        assert_eq!(deck.peek(2), None);
    }

    #[test]
    fn remaining_counts_cards_in_play() {
        let mut deck = deck_of(3);
        assert_eq!(deck.remaining(), 3);
        deck.advance();
        assert_eq!(deck.remaining(), 2);
    }
}
