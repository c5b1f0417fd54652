//! Error types for game commands.

use thiserror::Error;

/// Errors that can occur when the player plays a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game is not in progress.
    #[error("game is not in progress")]
    InvalidState,
    /// It is not the player's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// The card is not in the player's hand.
    #[error("card is not in your hand")]
    CardNotInHand,
    /// The card matches neither the active suit nor the top card's rank and
    /// is not an eight.
    #[error("card does not match the active suit or the top card's rank")]
    IllegalCard,
}

/// Errors that can occur when the player draws a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The game is not in progress.
    #[error("game is not in progress")]
    InvalidState,
    /// It is not the player's turn.
    #[error("not your turn")]
    NotYourTurn,
}

/// Errors that can occur while completing the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck ran out while scanning for a non-eight starting card.
    ///
    /// Unreachable with a standard 52-card deck (at most four eights sit
    /// among the 36 undealt cards); the scan is guarded anyway.
    #[error("deck exhausted while choosing a starting card")]
    DeckExhausted,
}

/// Errors that can occur when choosing a suit after a wild eight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitChoiceError {
    /// No suit choice is pending.
    #[error("no suit choice is pending")]
    NoChoicePending,
}
