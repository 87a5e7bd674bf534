//! Game state types.

/// One of the two parties at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human at the console.
    Player,
    /// The computer opponent.
    Computer,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }

    /// The state in which this side is due to play.
    #[must_use]
    pub const fn turn(self) -> GameState {
        match self {
            Self::Player => GameState::PlayerTurn,
            Self::Computer => GameState::ComputerTurn,
        }
    }

    /// Display name used in announcements.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Computer => "Computer",
        }
    }
}

/// Who opened the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnOrder {
    /// Nobody has been chosen yet.
    #[default]
    Undecided,
    /// The player opened.
    PlayerFirst,
    /// The computer opened.
    ComputerFirst,
}

impl TurnOrder {
    /// The order in which `side` opens.
    #[must_use]
    pub const fn starting_with(side: Side) -> Self {
        match side {
            Side::Player => Self::PlayerFirst,
            Side::Computer => Self::ComputerFirst,
        }
    }

    /// The side that opened, if decided.
    #[must_use]
    pub const fn first(self) -> Option<Side> {
        match self {
            Self::Undecided => None,
            Self::PlayerFirst => Some(Side::Player),
            Self::ComputerFirst => Some(Side::Computer),
        }
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the opening side to be chosen.
    Setup,
    /// Waiting for the player to play a card.
    PlayerTurn,
    /// Waiting for the computer to play a card.
    ComputerTurn,
    /// Deck and both hands are empty; the final sweep and score are pending.
    Over,
    /// Final score has been taken.
    Finished,
}

impl GameState {
    /// The side due to play, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::PlayerTurn => Some(Side::Player),
            Self::ComputerTurn => Some(Side::Computer),
            Self::Setup | Self::Over | Self::Finished => None,
        }
    }
}
