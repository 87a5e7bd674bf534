use crate::card::Card;
use crate::error::GameError;
use crate::strategy::{self, Decision};

use super::{Game, GameState, Side};

/// The outcome of one half-turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    /// Who played.
    pub side: Side,
    /// Position of the card in the hand before it was played.
    pub index: usize,
    /// The card played.
    pub card: Card,
    /// Cards moved from the table into the side's winnings; zero if the play
    /// did not match.
    pub swept: usize,
}

impl Play {
    /// Returns whether the play won the table.
    #[must_use]
    pub const fn won(&self) -> bool {
        self.swept > 0
    }
}

impl Game {
    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        if self.current_side()? != side {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    /// Player action: play the card at `index` (zero-based).
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not started or is over, it is the
    /// computer's turn, or `index` is outside the player's hand.
    pub fn play_player(&mut self, index: usize) -> Result<Play, GameError> {
        self.ensure_turn(Side::Player)?;
        self.refill_hands();
        self.play_card(Side::Player, index)
    }

    /// Lets the computer choose its card without playing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not started or is over, or it is the
    /// player's turn.
    pub fn computer_decision(&mut self) -> Result<Decision, GameError> {
        self.ensure_turn(Side::Computer)?;
        self.refill_hands();
        strategy::choose_card(self.computer.hand.cards(), self.table.top(), &mut self.rng)
            .ok_or(GameError::InvalidState)
    }

    /// Computer action: choose a card and play it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not started or is over, or it is the
    /// player's turn.
    pub fn play_computer(&mut self) -> Result<Play, GameError> {
        let decision = self.computer_decision()?;
        self.play_card(Side::Computer, decision.index)
    }

    fn play_card(&mut self, side: Side, index: usize) -> Result<Play, GameError> {
        let card = self
            .seat_mut(side)
            .hand
            .take(index)
            .ok_or(GameError::CardOutOfRange)?;

        let swept = if self.table.place(card) {
            let won = self.table.sweep();
            let count = won.len();
            self.seat_mut(side).winnings.collect(won);
            self.recent_winner = Some(side);
            log::debug!("{} plays {card} and wins {count} cards", side.name());
            count
        } else {
            log::debug!("{} plays {card}", side.name());
            0
        };

        self.state = if self.is_exhausted() {
            GameState::Over
        } else {
            side.other().turn()
        };

        Ok(Play {
            side,
            index,
            card,
            swept,
        })
    }
}
