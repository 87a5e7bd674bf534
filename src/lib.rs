//! The Indigo card game: a two-player trick-taking engine.
//!
//! The crate provides a [`Game`] type that owns every pile of cards and runs
//! the turn flow, a computer opponent in [`strategy`], end-of-game scoring in
//! [`score`], and a console front end in [`console`].
//!
//! # Example
//!
//! ```
//! use indigo::{Game, Side};
//!
//! let mut game = Game::new(42);
//! let opening = game.start(Side::Computer).unwrap();
//! assert_eq!(opening.len(), 4);
//!
//! let play = game.play_computer().unwrap();
//! assert_eq!(play.side, Side::Computer);
//! assert!(game.is_conserved());
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod pile;
pub mod score;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, MatchRule, Rank, Suit, generate_deck};
pub use console::Outcome;
pub use deck::Deck;
pub use error::{ConsoleError, GameError};
pub use game::{Game, GameState, HAND_SIZE, INITIAL_TABLE_CARDS, Play, Seat, Side, TurnOrder};
pub use pile::{Hand, Table, Winnings};
pub use score::{MOST_CARDS_BONUS, Score};
pub use strategy::{Decision, Reason};
