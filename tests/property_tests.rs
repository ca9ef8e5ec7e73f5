//! Property tests for the board invariant and the acceptance rule table.
//!
//! Random games are played by picking among the legal moves; whatever the
//! choices, every card must stay on the board exactly once.

use proptest::prelude::*;

use klondike_engine::{accepts, Card, Game, GameConfig, PileId, PileKind, Rank, Suit, DECK_SIZE};

fn card_strategy() -> impl Strategy<Value = Card> {
    (1u8..=13, 0usize..4).prop_map(|(rank, suit)| {
        Card::new(Rank::new(rank).unwrap(), Suit::ALL[suit]).face_up()
    })
}

fn config_strategy() -> impl Strategy<Value = GameConfig> {
    (any::<u64>(), 1usize..=5, proptest::option::of(0u32..4)).prop_map(|(seed, draw, loops)| {
        GameConfig::new()
            .with_seed(seed)
            .with_draw_size(draw)
            .with_loop_limit(loops)
    })
}

fn pile_strategy() -> impl Strategy<Value = PileId> {
    prop_oneof![
        Just(PileId::Stock),
        Just(PileId::Waste),
        (0u8..6).prop_map(PileId::Foundation),
        (0u8..9).prop_map(PileId::Tableau),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Test that random legal play never loses or duplicates a card.
    #[test]
    fn test_random_play_keeps_every_card(
        config in config_strategy(),
        choices in proptest::collection::vec(any::<usize>(), 0..200),
    ) {
        let mut game = Game::new(config).unwrap();
        for choice in choices {
            let moves = game.legal_moves();
            prop_assert_eq!(game.is_stuck(), moves.is_empty() && !game.is_won());
            if moves.is_empty() {
                break;
            }
            let mv = moves[choice % moves.len()];
            prop_assert_eq!(game.apply(mv), Ok(()), "{} was listed as legal", mv);
            prop_assert_eq!(game.board().card_count(), DECK_SIZE);
            prop_assert_eq!(game.board().validate(), Ok(()));
        }
    }

    /// Test that any rejected move leaves the board as it was.
    #[test]
    fn test_rejected_moves_change_nothing(
        config in config_strategy(),
        draws in 0usize..10,
        from in pile_strategy(),
        to in pile_strategy(),
        count in 0usize..14,
    ) {
        let mut game = Game::new(config).unwrap();
        for _ in 0..draws {
            let _ = game.draw();
        }
        let before = game.view();
        if game.move_cards(from, to, count).is_err() {
            prop_assert_eq!(game.view(), before);
        } else {
            prop_assert_eq!(game.board().validate(), Ok(()));
        }
    }

    /// Test that the same seed and config always deal the same game.
    #[test]
    fn test_same_seed_same_deal(config in config_strategy()) {
        let a = Game::new(config.clone()).unwrap();
        let b = Game::new(config).unwrap();
        prop_assert_eq!(a.view(), b.view());
    }

    /// Test that restore goes back to exactly the saved position.
    #[test]
    fn test_restore_is_exact(
        config in config_strategy(),
        before_save in 0usize..20,
        after_save in 1usize..20,
    ) {
        let mut game = Game::new(config).unwrap();
        for _ in 0..before_save {
            let _ = game.draw();
        }
        game.save();
        let saved = (game.view(), game.passes());
        for _ in 0..after_save {
            let _ = game.draw();
        }
        game.restore();
        prop_assert_eq!((game.view(), game.passes()), saved);
    }

    /// Test the foundation rule: same suit, one rank higher.
    #[test]
    fn test_foundation_acceptance(top in card_strategy(), card in card_strategy()) {
        let expected = top.suit() == card.suit() && top.rank().value() + 1 == card.rank().value();
        prop_assert_eq!(accepts(PileKind::Foundation, Some(top), card), expected);
        prop_assert_eq!(accepts(PileKind::Foundation, None, card), card.rank() == Rank::ACE);
    }

    /// Test the tableau rule: opposite color, one rank lower.
    #[test]
    fn test_tableau_acceptance(top in card_strategy(), card in card_strategy()) {
        let expected = top.color() != card.color() && card.rank().value() + 1 == top.rank().value();
        prop_assert_eq!(accepts(PileKind::Tableau, Some(top), card), expected);
        prop_assert_eq!(accepts(PileKind::Tableau, None, card), card.rank() == Rank::KING);
    }

    /// Test that stock and waste never accept a placed card.
    #[test]
    fn test_stock_and_waste_reject(top in proptest::option::of(card_strategy()), card in card_strategy()) {
        prop_assert!(!accepts(PileKind::Stock, top, card));
        prop_assert!(!accepts(PileKind::Waste, top, card));
    }
}
