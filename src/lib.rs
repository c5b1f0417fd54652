//! A Crazy Eights game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full game flow for
//! one human player against the house opponent: dealing, move legality,
//! turn progression, wild-eight suit selection, and win detection.
//! Rendering, input, and timing stay with the caller: the dealing pause and
//! the opponent's think delay come back from commands as [`Scheduled`]
//! tasks for the embedding view to deliver after waiting.
//!
//! # Example
//!
//! ```no_run
//! use c8rs::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let pending = game.start_game();
//! let _ = game.finish_dealing(pending);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Suit, WILD_RANK};
pub use error::{DealError, DrawError, PlayError, SuitChoiceError};
pub use game::{Game, GameState, Scheduled, Seat, Step};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{DealOutcome, DrawOutcome, OpponentOutcome, PlayOutcome, SuitChoiceOutcome};
