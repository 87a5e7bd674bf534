//! How the computer picks a card.
//!
//! The computer only grabs the table greedily when exactly one card in hand
//! can win it. Otherwise it prefers cards that leave it holding matching
//! pairs, so that later plays keep building toward sweeps.

use rand::Rng;

use crate::card::{Card, MatchRule};

/// Which branch of the decision procedure produced a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The hand held a single card.
    OnlyCard,
    /// Exactly one card could win the table.
    SingleCandidate,
    /// Nothing could win; played a card that shares a suit with another in hand.
    SuitJunk,
    /// Nothing could win; played a card that shares a rank with another in hand.
    RankJunk,
    /// Nothing could win and no pairs were held; the hand-wide random pick stands.
    Fallback,
    /// Several winners; picked among those sharing the top card's suit.
    SuitMatch,
    /// Several winners; picked among those sharing the top card's rank.
    RankMatch,
    /// Several winners, none dominant by suit or rank; picked among all of them.
    AnyCandidate,
}

/// The computer's choice for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Index into the hand.
    pub index: usize,
    /// The branch that produced it.
    pub reason: Reason,
}

/// Picks a card from `hand` to play on a table whose top card is `top`.
///
/// A hand-wide random index is drawn first on every call, so the RNG stream
/// advances the same way regardless of branch. Returns `None` for an empty
/// hand.
pub fn choose_card<R: Rng + ?Sized>(
    hand: &[Card],
    top: Option<&Card>,
    rng: &mut R,
) -> Option<Decision> {
    if hand.is_empty() {
        return None;
    }

    let fallback = rng.random_range(0..hand.len());
    if hand.len() == 1 {
        return Some(Decision {
            index: fallback,
            reason: Reason::OnlyCard,
        });
    }

    let candidates: Vec<usize> = top.map_or_else(Vec::new, |top| {
        hand.iter()
            .enumerate()
            .filter(|(_, card)| card.matches(top))
            .map(|(index, _)| index)
            .collect()
    });

    let decision = match (top, candidates.as_slice()) {
        (_, &[only]) => Decision {
            index: only,
            reason: Reason::SingleCandidate,
        },
        (None, _) | (_, []) => {
            let suit_junk = junk_pairs(hand, MatchRule::Suit);
            if suit_junk.is_empty() {
                let rank_junk = junk_pairs(hand, MatchRule::Rank);
                if rank_junk.is_empty() {
                    Decision {
                        index: fallback,
                        reason: Reason::Fallback,
                    }
                } else {
                    Decision {
                        index: pick(&rank_junk, rng),
                        reason: Reason::RankJunk,
                    }
                }
            } else {
                Decision {
                    index: pick(&suit_junk, rng),
                    reason: Reason::SuitJunk,
                }
            }
        }
        (Some(top), _) => {
            let by_suit = matching_top(hand, top, MatchRule::Suit);
            let by_rank = matching_top(hand, top, MatchRule::Rank);
            if by_suit.len() >= 2 {
                Decision {
                    index: pick(&by_suit, rng),
                    reason: Reason::SuitMatch,
                }
            } else if by_rank.len() >= 2 {
                Decision {
                    index: pick(&by_rank, rng),
                    reason: Reason::RankMatch,
                }
            } else {
                // e.g. one suit match and one rank match
                Decision {
                    index: pick(&candidates, rng),
                    reason: Reason::AnyCandidate,
                }
            }
        }
    };

    log::debug!(
        "computer picks {} ({:?})",
        hand[decision.index],
        decision.reason
    );
    Some(decision)
}

/// Indices of cards that match at least one *other* card in `hand` under `rule`.
///
/// Indices appear in the order they are first found.
#[must_use]
pub fn junk_pairs(hand: &[Card], rule: MatchRule) -> Vec<usize> {
    let mut indices = Vec::new();
    for (first, a) in hand.iter().enumerate() {
        for (second, b) in hand.iter().enumerate().skip(first + 1) {
            if a != b && a.matches_by(b, rule) {
                for index in [first, second] {
                    if !indices.contains(&index) {
                        indices.push(index);
                    }
                }
            }
        }
    }
    indices
}

/// Indices of cards in `hand` that match `top` under `rule`.
#[must_use]
pub fn matching_top(hand: &[Card], top: &Card, rule: MatchRule) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| top.matches_by(card, rule))
        .map(|(index, _)| index)
        .collect()
}

fn pick<R: Rng + ?Sized>(indices: &[usize], rng: &mut R) -> usize {
    indices[rng.random_range(0..indices.len())]
}
