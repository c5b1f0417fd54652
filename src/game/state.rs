//! Game state types.

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No game has been started yet.
    NotStarted,
    /// A deal is pending; no play is accepted until it completes.
    Dealing,
    /// The game is in progress and a move is expected from the turn owner.
    InProgress,
    /// The player played a wild eight and must choose a suit.
    AwaitingSuitChoice,
    /// The game has ended. Terminal; only a restart leaves it.
    Finished,
}

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The human player.
    Player,
    /// The computer opponent.
    Opponent,
}

impl Seat {
    /// Returns the other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// A deferred engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Complete the pending deal.
    FinishDeal,
    /// Run the opponent's move.
    OpponentMove,
}

/// Handle for a deferred engine step.
///
/// Tasks are keyed by the engine epoch at creation. Restarting a game and
/// reaching the end of one both bump the epoch, so a task can outlive its
/// game only as a harmless no-op: delivering it reports a cancelled outcome
/// and changes nothing. At most one task is outstanding at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    /// Engine epoch the task was created under.
    pub(crate) epoch: u64,
    /// The step to run when the task is delivered.
    pub step: Step,
    /// How long the view should wait before delivering the task, in
    /// milliseconds.
    pub delay_ms: u64,
}
