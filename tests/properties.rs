//! Property tests over cards, strategy and whole games.

use indigo::strategy::choose_card;
use indigo::{DECK_SIZE, Deck, Game, Side, generate_deck};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #[test]
    fn matching_is_symmetric(a in 0..DECK_SIZE, b in 0..DECK_SIZE) {
        let deck = generate_deck();
        prop_assert_eq!(deck[a].matches(&deck[b]), deck[b].matches(&deck[a]));
    }

    #[test]
    fn computer_always_picks_a_card_in_hand(
        seed in any::<u64>(),
        size in 1usize..=6,
        with_top in any::<bool>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        let (hand, rest) = deck.cards().split_at(size);
        let top = with_top.then_some(&rest[0]);

        let decision = choose_card(hand, top, &mut rng);
        prop_assert!(decision.is_some_and(|d| d.index < size));
    }

    #[test]
    fn cards_are_conserved_through_a_game(
        seed in any::<u64>(),
        player_first in any::<bool>(),
        picks in proptest::collection::vec(0usize..6, 24),
    ) {
        let mut game = Game::new(seed);
        let first = if player_first { Side::Player } else { Side::Computer };
        game.start(first).unwrap();
        prop_assert!(game.is_conserved());

        let mut picks = picks.into_iter();
        while !game.is_exhausted() {
            match game.begin_turn().unwrap() {
                Side::Player => {
                    let pick = picks.next().unwrap_or(0) % game.player.hand.len();
                    game.play_player(pick).unwrap();
                }
                Side::Computer => {
                    game.play_computer().unwrap();
                }
            }
            prop_assert!(game.is_conserved());
        }

        let score = game.finish().unwrap();
        prop_assert_eq!(score.player_cards + score.computer_cards, DECK_SIZE);
        prop_assert!(game.table.is_empty());
    }
}
