use alloc::vec::Vec;

use crate::card::{Card, HAND_SIZE};
use crate::error::DealError;
use crate::hand::Hand;
use crate::result::DealOutcome;

use super::{Game, GameState, Scheduled, Seat, Step};

impl Game {
    /// Starts a game, or restarts one already underway.
    ///
    /// Enters the dealing state and returns the task that completes the
    /// deal. Restarting supersedes any outstanding task: tasks from the
    /// previous game report a cancelled outcome when delivered and never
    /// touch the new game.
    pub fn start_game(&self) -> Scheduled {
        *self.state.lock() = GameState::Dealing;
        self.bump_epoch();
        self.schedule(Step::FinishDeal, self.options.deal_delay_ms)
    }

    /// Completes a pending deal.
    ///
    /// Shuffles a fresh 52-card deck, deals [`HAND_SIZE`] cards to the
    /// player and then to the opponent from the deck's front, and turns the
    /// first non-eight card of the remainder face up to start the discard
    /// pile. Eights skipped by that scan stay in the deck in their original
    /// order. The active suit becomes the starting card's suit and play
    /// begins with the player.
    ///
    /// A task from a superseded game is discarded with
    /// [`DealOutcome::Cancelled`] and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if the scan runs out of cards
    /// before finding a non-eight. This cannot happen with a standard deck;
    /// the scan is guarded rather than trusted to terminate.
    pub fn finish_dealing(&self, task: Scheduled) -> Result<DealOutcome, DealError> {
        if !self.task_is_current(task, Step::FinishDeal)
            || *self.state.lock() != GameState::Dealing
        {
            return Ok(DealOutcome::Cancelled);
        }

        let mut deck = Self::fresh_deck(&mut self.rng.lock());

        let mut player_hand = Hand::new();
        for card in deck.drain(..HAND_SIZE) {
            player_hand.add(card);
        }

        let mut opponent_hand = Hand::new();
        for card in deck.drain(..HAND_SIZE) {
            opponent_hand.add(card);
        }

        let starting_card = take_starting_card(&mut deck)?;

        *self.deck.lock() = deck;
        *self.player_hand.lock() = player_hand;
        *self.opponent_hand.lock() = opponent_hand;
        *self.discard.lock() = alloc::vec![starting_card];
        *self.active_suit.lock() = Some(starting_card.suit);
        *self.turn.lock() = Seat::Player;
        *self.winner.lock() = None;
        *self.state.lock() = GameState::InProgress;

        self.debug_assert_partition();

        Ok(DealOutcome::Dealt)
    }
}

/// Removes and returns the first non-eight card from the front of `deck`.
///
/// Cards in front of it are left untouched, so any skipped eights keep
/// their relative order.
fn take_starting_card(deck: &mut Vec<Card>) -> Result<Card, DealError> {
    match deck.iter().position(|card| !card.is_wild()) {
        Some(index) => Ok(deck.remove(index)),
        None => Err(DealError::DeckExhausted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Suit, WILD_RANK};

    #[test]
    fn starting_card_scan_skips_eights_in_place() {
        let mut deck = alloc::vec![
            Card::new(Suit::Hearts, WILD_RANK),
            Card::new(Suit::Spades, WILD_RANK),
            Card::new(Suit::Clubs, 5),
            Card::new(Suit::Diamonds, 9),
        ];

        let starting_card = take_starting_card(&mut deck).unwrap();

        assert_eq!(starting_card, Card::new(Suit::Clubs, 5));
        assert_eq!(
            deck,
            [
                Card::new(Suit::Hearts, WILD_RANK),
                Card::new(Suit::Spades, WILD_RANK),
                Card::new(Suit::Diamonds, 9),
            ]
        );
    }

    #[test]
    fn starting_card_scan_takes_front_card_when_not_an_eight() {
        let mut deck = alloc::vec![
            Card::new(Suit::Diamonds, 2),
            Card::new(Suit::Hearts, WILD_RANK),
        ];

        let starting_card = take_starting_card(&mut deck).unwrap();

        assert_eq!(starting_card, Card::new(Suit::Diamonds, 2));
        assert_eq!(deck, [Card::new(Suit::Hearts, WILD_RANK)]);
    }

    #[test]
    fn starting_card_scan_guards_against_exhaustion() {
        let mut deck = alloc::vec![
            Card::new(Suit::Hearts, WILD_RANK),
            Card::new(Suit::Clubs, WILD_RANK),
        ];

        assert_eq!(take_starting_card(&mut deck), Err(DealError::DeckExhausted));
        assert_eq!(deck.len(), 2);
    }
}
