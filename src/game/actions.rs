use crate::card::{Card, Suit};
use crate::error::{DrawError, PlayError, SuitChoiceError};
use crate::result::{DrawOutcome, PlayOutcome, SuitChoiceOutcome};

use super::{Game, GameState, Seat, Step};

impl Game {
    /// Player action: play a card from the hand onto the discard pile.
    ///
    /// A non-eight sets the active suit to its own suit and passes the turn;
    /// the returned task runs the opponent's reply. A wild eight parks the
    /// game until [`choose_suit`](Self::choose_suit) is called; the turn
    /// stays with the player and the active suit is left untouched until
    /// then.
    ///
    /// # Errors
    ///
    /// Returns an error, without changing any state, if the game is not in
    /// progress, it is not the player's turn, the card is not in the
    /// player's hand, or the card is not a legal play.
    pub fn play_card(&self, card: Card) -> Result<PlayOutcome, PlayError> {
        if *self.state.lock() != GameState::InProgress {
            return Err(PlayError::InvalidState);
        }
        if *self.turn.lock() != Seat::Player {
            return Err(PlayError::NotYourTurn);
        }
        if !self.player_hand.lock().contains(card) {
            return Err(PlayError::CardNotInHand);
        }
        if !self.is_legal_move(card) {
            return Err(PlayError::IllegalCard);
        }

        let removed = self.player_hand.lock().take(card);
        debug_assert!(removed, "card presence was checked above");
        self.discard.lock().push(card);

        if card.is_wild() {
            *self.state.lock() = GameState::AwaitingSuitChoice;
            self.debug_assert_partition();
            return Ok(PlayOutcome::SuitChoiceNeeded);
        }

        *self.active_suit.lock() = Some(card.suit);
        *self.turn.lock() = Seat::Opponent;
        self.debug_assert_partition();

        if self.settle_if_won().is_some() {
            return Ok(PlayOutcome::GameOver);
        }

        Ok(PlayOutcome::TurnPassed(
            self.schedule(Step::OpponentMove, self.options.think_delay_ms),
        ))
    }

    /// Player action: draw one card from the deck.
    ///
    /// The turn passes after exactly one draw, even when the drawn card
    /// would have been legal to play. An empty deck forfeits the draw and
    /// passes the turn all the same.
    ///
    /// # Errors
    ///
    /// Returns an error, without changing any state, if the game is not in
    /// progress or it is not the player's turn.
    pub fn draw_card(&self) -> Result<DrawOutcome, DrawError> {
        if *self.state.lock() != GameState::InProgress {
            return Err(DrawError::InvalidState);
        }
        if *self.turn.lock() != Seat::Player {
            return Err(DrawError::NotYourTurn);
        }

        let drawn = self.deck.lock().pop();
        *self.turn.lock() = Seat::Opponent;
        let next = self.schedule(Step::OpponentMove, self.options.think_delay_ms);

        match drawn {
            Some(card) => {
                self.player_hand.lock().add(card);
                self.debug_assert_partition();
                Ok(DrawOutcome::Drew { card, next })
            }
            None => Ok(DrawOutcome::DeckEmpty { next }),
        }
    }

    /// Player action: choose the active suit after playing a wild eight.
    ///
    /// Sets the active suit and passes the turn to the opponent. If the
    /// eight was the player's last card, this settles the win instead and
    /// the game finishes.
    ///
    /// # Errors
    ///
    /// Returns an error, without changing any state, if no suit choice is
    /// pending.
    pub fn choose_suit(&self, suit: Suit) -> Result<SuitChoiceOutcome, SuitChoiceError> {
        if *self.state.lock() != GameState::AwaitingSuitChoice {
            return Err(SuitChoiceError::NoChoicePending);
        }

        *self.active_suit.lock() = Some(suit);
        *self.state.lock() = GameState::InProgress;
        *self.turn.lock() = Seat::Opponent;

        if self.settle_if_won().is_some() {
            return Ok(SuitChoiceOutcome::GameOver);
        }

        Ok(SuitChoiceOutcome::TurnPassed(
            self.schedule(Step::OpponentMove, self.options.think_delay_ms),
        ))
    }
}
