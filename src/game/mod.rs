//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::pile::{Hand, Table, Winnings};
use crate::score::{self, Score};

mod deal;
mod finish;
mod play;
pub mod state;

pub use play::Play;
pub use state::{GameState, Side, TurnOrder};

/// Cards each side holds after a deal.
pub const HAND_SIZE: usize = 6;

/// Cards laid face-up on the table when the game starts.
pub const INITIAL_TABLE_CARDS: usize = 4;

/// One side's cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    /// Cards held.
    pub hand: Hand,
    /// Cards won.
    pub winnings: Winnings,
}

/// An Indigo game between the player and the computer.
///
/// The game owns every pile of cards. Across all of them there are always
/// [`DECK_SIZE`] cards; see [`Game::total_cards`].
#[derive(Debug, Clone)]
pub struct Game {
    /// The face-down draw pile.
    pub deck: Deck,
    /// The face-up stack.
    pub table: Table,
    /// The human's hand and winnings.
    pub player: Seat,
    /// The computer's hand and winnings.
    pub computer: Seat,
    state: GameState,
    order: TurnOrder,
    recent_winner: Option<Side>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a shuffled deck.
    ///
    /// The seed drives both the shuffle and the computer's random choices.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{Game, GameState};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.state(), GameState::Setup);
    /// assert_eq!(game.deck.len(), 52);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            deck,
            table: Table::new(),
            player: Seat::default(),
            computer: Seat::default(),
            state: GameState::Setup,
            order: TurnOrder::Undecided,
            recent_winner: None,
            rng,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns who opened the game.
    #[must_use]
    pub const fn turn_order(&self) -> TurnOrder {
        self.order
    }

    /// Returns who most recently won the table.
    ///
    /// Starts as the opening side, before any trick is taken.
    #[must_use]
    pub const fn recent_winner(&self) -> Option<Side> {
        self.recent_winner
    }

    const fn seat_mut(&mut self, side: Side) -> &mut Seat {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    /// Returns the running score (no end-of-game bonus).
    #[must_use]
    pub fn round_score(&self) -> Score {
        score::tally(&self.player.winnings, &self.computer.winnings)
    }

    /// Returns whether the deck and both hands are empty.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.player.hand.is_empty() && self.computer.hand.is_empty()
    }

    /// Counts cards across every pile. Equals [`DECK_SIZE`] for a game built
    /// with [`Game::new`].
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.table.len()
            + self.player.hand.len()
            + self.computer.hand.len()
            + self.player.winnings.len()
            + self.computer.winnings.len()
    }

    /// Returns whether no card has been lost or duplicated.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.total_cards() == DECK_SIZE
    }
}
