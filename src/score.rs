//! Point tallies for the running display and the end of the game.

use crate::game::Side;
use crate::pile::Winnings;

/// Bonus for the side holding more won cards at the end of the game.
pub const MOST_CARDS_BONUS: u32 = 3;

/// Scores and card counts for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// The player's points.
    pub player: u32,
    /// The computer's points.
    pub computer: u32,
    /// Cards in the player's winnings pile.
    pub player_cards: usize,
    /// Cards in the computer's winnings pile.
    pub computer_cards: usize,
}

/// Running score: card points only, no bonus.
#[must_use]
pub fn tally(player: &Winnings, computer: &Winnings) -> Score {
    Score {
        player: player.points(),
        computer: computer.points(),
        player_cards: player.len(),
        computer_cards: computer.len(),
    }
}

/// End-of-game score.
///
/// The side with strictly more won cards gets [`MOST_CARDS_BONUS`]; on a tie
/// it goes to `recent_winner`. A side that won nothing scores zero.
#[must_use]
pub fn final_tally(player: &Winnings, computer: &Winnings, recent_winner: Side) -> Score {
    let bonus_side = match player.len().cmp(&computer.len()) {
        core::cmp::Ordering::Greater => Side::Player,
        core::cmp::Ordering::Less => Side::Computer,
        core::cmp::Ordering::Equal => recent_winner,
    };

    let side_score = |pile: &Winnings, side: Side| {
        if pile.is_empty() {
            return 0;
        }
        let bonus = if side == bonus_side { MOST_CARDS_BONUS } else { 0 };
        pile.points() + bonus
    };

    Score {
        player: side_score(player, Side::Player),
        computer: side_score(computer, Side::Computer),
        player_cards: player.len(),
        computer_cards: computer.len(),
    }
}
