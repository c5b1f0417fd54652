use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Suit};
use crate::result::OpponentOutcome;

use super::{Game, GameState, Scheduled, Seat, Step};

impl Game {
    /// Runs the opponent's scheduled move.
    ///
    /// The policy is greedy and never looks ahead: it plays the first legal
    /// non-eight in hand order, falls back to the first legal eight, and
    /// draws when nothing is legal. It goes through the same legality
    /// predicate as human input validation.
    ///
    /// A stale task (the game was restarted or finished after it was
    /// scheduled) is discarded with [`OpponentOutcome::Cancelled`] and
    /// changes nothing.
    pub fn opponent_move(&self, task: Scheduled) -> OpponentOutcome {
        if !self.task_is_current(task, Step::OpponentMove) {
            return OpponentOutcome::Cancelled;
        }
        if *self.state.lock() != GameState::InProgress || *self.turn.lock() != Seat::Opponent {
            debug_assert!(false, "live opponent task outside the opponent's turn");
            return OpponentOutcome::Cancelled;
        }

        let (Some(active_suit), Some(top_card)) = (self.active_suit(), self.top_card()) else {
            debug_assert!(false, "in-progress game without an active suit and top card");
            return OpponentOutcome::Cancelled;
        };

        let chosen = pick_move(self.opponent_hand.lock().cards(), active_suit, top_card);

        let outcome = match chosen {
            Some(card) => self.opponent_play(card),
            None => self.opponent_draw(),
        };

        // A task is good for one delivery; a late duplicate is stale.
        self.bump_epoch();
        outcome
    }

    /// Applies the policy's chosen play.
    fn opponent_play(&self, card: Card) -> OpponentOutcome {
        debug_assert!(
            self.is_legal_move(card),
            "opponent policy submitted an illegal card"
        );

        let removed = self.opponent_hand.lock().take(card);
        debug_assert!(removed, "opponent policy submitted a card it does not hold");
        self.discard.lock().push(card);

        // A wild eight never exposes a suit-choice state for the opponent:
        // the replacement suit is picked in the same step.
        let chosen_suit = if card.is_wild() {
            let suit = pick_suit(self.opponent_hand.lock().suit_counts(), &mut self.rng.lock());
            *self.active_suit.lock() = Some(suit);
            Some(suit)
        } else {
            *self.active_suit.lock() = Some(card.suit);
            None
        };

        *self.turn.lock() = Seat::Player;
        self.debug_assert_partition();
        self.settle_if_won();

        OpponentOutcome::Played { card, chosen_suit }
    }

    /// Draws one card for the opponent, or forfeits the turn on an empty
    /// deck.
    fn opponent_draw(&self) -> OpponentOutcome {
        let drawn = self.deck.lock().pop();
        *self.turn.lock() = Seat::Player;

        match drawn {
            Some(card) => {
                self.opponent_hand.lock().add(card);
                self.debug_assert_partition();
                OpponentOutcome::Drew
            }
            None => OpponentOutcome::DeckEmpty,
        }
    }
}

/// Picks the card to play: the first legal non-eight in hand order, else the
/// first legal eight, else `None` (draw).
fn pick_move(hand: &[Card], active_suit: Suit, top_card: Card) -> Option<Card> {
    let mut first_eight = None;

    for &card in hand {
        if !card.is_playable(active_suit, top_card) {
            continue;
        }
        if !card.is_wild() {
            return Some(card);
        }
        if first_eight.is_none() {
            first_eight = Some(card);
        }
    }

    first_eight
}

/// Picks the replacement suit after a wild eight.
///
/// Takes the suit with the highest count in the remaining hand; on a tie,
/// or when no other cards are held, falls back to a uniformly random suit
/// among the four.
fn pick_suit(counts: [usize; 4], rng: &mut ChaCha8Rng) -> Suit {
    let best = counts[0].max(counts[1]).max(counts[2]).max(counts[3]);
    let contenders = counts.iter().filter(|&&count| count == best).count();

    if best > 0 && contenders == 1 {
        for (suit, count) in Suit::ALL.into_iter().zip(counts) {
            if count == best {
                return suit;
            }
        }
    }

    Suit::ALL[rng.random_range(0..Suit::ALL.len())]
}
