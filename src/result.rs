//! Outcome types returned by game commands.
//!
//! Outcomes carry everything a display layer needs to narrate a move;
//! authoritative state stays inside the engine and is read through the
//! projection methods on [`Game`](crate::Game).

use crate::card::{Card, Suit};
use crate::game::Scheduled;

/// Outcome of completing a pending deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealOutcome {
    /// Cards were dealt; play begins with the player.
    Dealt,
    /// The task belonged to a superseded game and was discarded.
    Cancelled,
}

/// Outcome of the player playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card was played and the turn passed; the task runs the
    /// opponent's reply.
    TurnPassed(Scheduled),
    /// A wild eight was played; the engine is waiting for
    /// [`choose_suit`](crate::Game::choose_suit).
    SuitChoiceNeeded,
    /// The card emptied the player's hand and won the game.
    GameOver,
}

/// Outcome of the player drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was drawn; the turn passed to the opponent.
    Drew {
        /// The card that joined the player's hand.
        card: Card,
        /// The task that runs the opponent's reply.
        next: Scheduled,
    },
    /// The deck was empty; the draw was forfeited and the turn passed.
    DeckEmpty {
        /// The task that runs the opponent's reply.
        next: Scheduled,
    },
}

/// Outcome of choosing a suit after a wild eight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuitChoiceOutcome {
    /// The suit was set and the turn passed; the task runs the opponent's
    /// reply.
    TurnPassed(Scheduled),
    /// The wild eight was the player's last card; choosing the suit settled
    /// the win.
    GameOver,
}

/// Outcome of the opponent's scheduled move.
///
/// The opponent's hand stays hidden: a draw does not reveal the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentOutcome {
    /// The policy played a card; `chosen_suit` is set when it was an eight.
    Played {
        /// The card played onto the discard pile.
        card: Card,
        /// The replacement suit chosen for a wild eight.
        chosen_suit: Option<Suit>,
    },
    /// No legal card was held; the policy drew one card and passed the turn.
    Drew,
    /// No legal card was held and the deck was empty; the turn was
    /// forfeited.
    DeckEmpty,
    /// The task was stale (the game was restarted or has finished) and was
    /// discarded.
    Cancelled,
}
