//! Hand storage for the two seats.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// Cards held by one seat.
///
/// Iteration order is stable: cards keep the order they were dealt or drawn
/// in, and removal closes the gap without reordering. The opponent policy
/// relies on this when it prefers the first legal card.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes `card` from the hand, keeping the remaining cards in order.
    ///
    /// Returns `false` if the card is not held.
    pub fn take(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&held| held == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the cards in hand order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards playable on `top_card` under `active_suit`, in hand
    /// order.
    #[must_use]
    pub fn playable(&self, active_suit: Suit, top_card: Card) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|card| card.is_playable(active_suit, top_card))
            .collect()
    }

    /// Counts the cards of each suit, indexed as in [`Suit::ALL`].
    #[must_use]
    pub fn suit_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for card in &self.cards {
            counts[card.suit as usize] += 1;
        }
        counts
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
