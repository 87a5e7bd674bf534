use crate::card::Card;
use crate::error::GameError;

use super::{Game, GameState, HAND_SIZE, INITIAL_TABLE_CARDS, Side, TurnOrder};

impl Game {
    /// Starts the game with `first` to play.
    ///
    /// Lays [`INITIAL_TABLE_CARDS`] cards face-up and returns them. The
    /// opening side also counts as the most recent winner until a trick is
    /// taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already started.
    pub fn start(&mut self, first: Side) -> Result<Vec<Card>, GameError> {
        if self.state != GameState::Setup {
            return Err(GameError::InvalidState);
        }

        self.order = TurnOrder::starting_with(first);
        self.recent_winner = Some(first);

        let opening = self.deck.draw(INITIAL_TABLE_CARDS);
        self.table.lay(opening.iter().copied());
        log::info!(
            "{} goes first, table opens with {} cards",
            first.name(),
            opening.len()
        );

        self.state = if self.is_exhausted() {
            GameState::Over
        } else {
            first.turn()
        };

        Ok(opening)
    }

    /// Prepares the next half-turn and returns the side due to play.
    ///
    /// When both hands are empty they are refilled first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::TurnOrderUndecided`] before [`Game::start`], and
    /// [`GameError::InvalidState`] once the game is over.
    pub fn begin_turn(&mut self) -> Result<Side, GameError> {
        let side = self.current_side()?;
        self.refill_hands();
        Ok(side)
    }

    pub(super) fn current_side(&self) -> Result<Side, GameError> {
        match self.state {
            GameState::Setup if self.order == TurnOrder::Undecided => {
                Err(GameError::TurnOrderUndecided)
            }
            state => state.side().ok_or(GameError::InvalidState),
        }
    }

    /// Deals [`HAND_SIZE`] cards to each side, one at a time and alternating,
    /// if both hands are empty. Returns whether a deal took place.
    pub(super) fn refill_hands(&mut self) -> bool {
        if !self.player.hand.is_empty() || !self.computer.hand.is_empty() || self.deck.is_empty()
        {
            return false;
        }

        for _ in 0..HAND_SIZE {
            if let Some(card) = self.deck.draw_one() {
                self.player.hand.add_card(card);
            }
            if let Some(card) = self.deck.draw_one() {
                self.computer.hand.add_card(card);
            }
        }
        log::debug!(
            "dealt hands: player {}, computer {}, {} left in deck",
            self.player.hand.len(),
            self.computer.hand.len(),
            self.deck.len()
        );
        true
    }
}
