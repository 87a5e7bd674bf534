//! Error types for game operations.

use thiserror::Error;

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The operation is not legal in the current phase.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// The other side is due to play.
    #[error("not this side's turn")]
    NotYourTurn,
    /// The chosen card index is outside the hand.
    #[error("card index out of range")]
    CardOutOfRange,
    /// A turn was requested before anyone was chosen to go first.
    ///
    /// The console never lets this happen; seeing it means the engine was
    /// driven out of order.
    #[error("turn order was never decided")]
    TurnOrderUndecided,
}

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The engine reported an internal inconsistency.
    #[error("game engine fault: {0}")]
    Game(#[from] GameError),
}
