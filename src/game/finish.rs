use crate::error::GameError;
use crate::score::{self, Score};

use super::{Game, GameState};

impl Game {
    /// Ends a game whose deck and hands have run out.
    ///
    /// Any cards left on the table go to the side that opened the game, then
    /// the final score (with the most-cards bonus) is returned.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is in [`GameState::Over`].
    pub fn finish(&mut self) -> Result<Score, GameError> {
        if self.state != GameState::Over {
            return Err(GameError::InvalidState);
        }

        let first = self.order.first().ok_or(GameError::TurnOrderUndecided)?;
        let leftover = self.table.sweep();
        if !leftover.is_empty() {
            log::debug!("{} takes the {} leftover cards", first.name(), leftover.len());
        }
        self.seat_mut(first).winnings.collect(leftover);

        let recent_winner = self.recent_winner.unwrap_or(first);
        let score = score::final_tally(
            &self.player.winnings,
            &self.computer.winnings,
            recent_winner,
        );
        self.state = GameState::Finished;

        log::info!(
            "game finished: player {} ({} cards), computer {} ({} cards)",
            score.player,
            score.player_cards,
            score.computer,
            score.computer_cards
        );
        Ok(score)
    }
}
