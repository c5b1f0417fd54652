//! Game engine and state management.

use core::sync::atomic::{AtomicU64, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod deal;
mod opponent;
pub mod state;

pub use state::{GameState, Scheduled, Seat, Step};

/// A Crazy Eights game engine for one human player against the house
/// opponent.
///
/// The engine owns the deck, both hands, the discard pile, and all derived
/// state. Commands take `&self`; mutable state sits behind mutexes so a UI
/// can hold the game in shared ownership. The engine runs no timers of its
/// own: the dealing pause and the opponent's think delay come back to the
/// caller as [`Scheduled`] tasks to deliver after waiting.
pub struct Game {
    /// Draw deck. The back of the vector is the draw end.
    pub deck: Mutex<Vec<Card>>,
    /// The human player's hand.
    pub player_hand: Mutex<Hand>,
    /// The opponent's hand.
    pub opponent_hand: Mutex<Hand>,
    /// Discard pile. The last card is the top card.
    pub discard: Mutex<Vec<Card>>,
    /// The suit a play must match unless wild; `None` before the first deal.
    pub active_suit: Mutex<Option<Suit>>,
    /// Current game status.
    pub state: Mutex<GameState>,
    /// Seat whose turn it is.
    pub turn: Mutex<Seat>,
    /// Winner of a finished game.
    pub winner: Mutex<Option<Seat>>,
    /// Game options.
    pub options: GameOptions,
    /// Epoch for scheduled tasks; bumped on every restart and at game end.
    epoch: AtomicU64,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The game starts idle; call [`start_game`](Self::start_game) to deal.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use c8rs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Mutex::new(Vec::new()),
            player_hand: Mutex::new(Hand::new()),
            opponent_hand: Mutex::new(Hand::new()),
            discard: Mutex::new(Vec::new()),
            active_suit: Mutex::new(None),
            state: Mutex::new(GameState::NotStarted),
            turn: Mutex::new(Seat::Player),
            winner: Mutex::new(None),
            options,
            epoch: AtomicU64::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates and shuffles the 52-card deck.
    fn fresh_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Returns the current game status.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the seat whose turn it is.
    pub fn turn(&self) -> Seat {
        *self.turn.lock()
    }

    /// Returns the winner of a finished game, if any.
    pub fn winner(&self) -> Option<Seat> {
        *self.winner.lock()
    }

    /// Returns the suit a play currently has to match.
    ///
    /// `None` before the first deal completes.
    pub fn active_suit(&self) -> Option<Suit> {
        *self.active_suit.lock()
    }

    /// Returns the top card of the discard pile, if any.
    pub fn top_card(&self) -> Option<Card> {
        self.discard.lock().last().copied()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn deck_size(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns a clone of the player's hand contents, in hand order.
    pub fn player_hand(&self) -> Vec<Card> {
        self.player_hand.lock().cards().to_vec()
    }

    /// Returns the number of cards in the player's hand.
    pub fn player_hand_size(&self) -> usize {
        self.player_hand.lock().len()
    }

    /// Returns the number of cards in the opponent's hand.
    ///
    /// The opponent's cards themselves are never exposed.
    pub fn opponent_hand_size(&self) -> usize {
        self.opponent_hand.lock().len()
    }

    /// Returns whether `card` would be a legal play right now.
    ///
    /// Before the first deal completes there is no top card and nothing is
    /// legal.
    pub fn is_legal_move(&self, card: Card) -> bool {
        let Some(active_suit) = *self.active_suit.lock() else {
            return false;
        };
        let Some(top_card) = self.top_card() else {
            return false;
        };
        card.is_playable(active_suit, top_card)
    }

    /// Returns the player's currently legal cards, in hand order.
    pub fn legal_moves(&self) -> Vec<Card> {
        let Some(active_suit) = *self.active_suit.lock() else {
            return Vec::new();
        };
        let Some(top_card) = self.top_card() else {
            return Vec::new();
        };
        self.player_hand.lock().playable(active_suit, top_card)
    }

    /// Returns the current epoch.
    fn current_epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Invalidates every outstanding scheduled task.
    fn bump_epoch(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    /// Creates a task bound to the current epoch.
    fn schedule(&self, step: Step, delay_ms: u64) -> Scheduled {
        Scheduled {
            epoch: self.current_epoch(),
            step,
            delay_ms,
        }
    }

    /// Returns whether `task` is live and was delivered to the right entry
    /// point.
    fn task_is_current(&self, task: Scheduled, step: Step) -> bool {
        debug_assert!(
            task.step == step,
            "task delivered to the wrong entry point"
        );
        task.step == step && task.epoch == self.current_epoch()
    }

    /// Settles the win condition after a completed play.
    ///
    /// Runs only while the game is in progress: a wild eight that empties
    /// the player's hand parks the game in suit choice, and the win is
    /// settled by the following [`choose_suit`](Self::choose_suit). The
    /// player is checked first so the outcome is deterministic.
    fn settle_if_won(&self) -> Option<Seat> {
        if *self.state.lock() != GameState::InProgress {
            return None;
        }

        let winner = if self.player_hand.lock().is_empty() {
            Seat::Player
        } else if self.opponent_hand.lock().is_empty() {
            Seat::Opponent
        } else {
            return None;
        };

        *self.winner.lock() = Some(winner);
        *self.state.lock() = GameState::Finished;
        self.bump_epoch();
        Some(winner)
    }

    /// Debug-build check that the four zones partition the 52-card universe.
    fn debug_assert_partition(&self) {
        #[cfg(debug_assertions)]
        {
            let mut seen = [false; DECK_SIZE];
            let mut total = 0_usize;

            let mut mark = |card: Card| {
                let index = card.suit as usize * 13 + (card.rank as usize - 1);
                assert!(!seen[index], "duplicate card {card}");
                seen[index] = true;
                total += 1;
            };

            for &card in self.deck.lock().iter() {
                mark(card);
            }
            for &card in self.player_hand.lock().cards() {
                mark(card);
            }
            for &card in self.opponent_hand.lock().cards() {
                mark(card);
            }
            for &card in self.discard.lock().iter() {
                mark(card);
            }

            assert_eq!(total, DECK_SIZE, "cards were lost or created");
        }
    }
}
