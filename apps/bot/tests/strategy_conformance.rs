//! Property coverage for the decision engine: for any well-formed snapshot
//! it must answer, answer the same way twice, and leave the snapshot alone.

use bot::ai::{Heuristic, Strategy as DecisionStrategy};
use bot::domain::{Action, Hand, PlayerState, TableState};
use proptest::prelude::*;

prop_compose! {
    /// A valid hand: draw a set of card values and split it into maximal
    /// ascending runs.
    fn arb_hand()(values in proptest::collection::btree_set(3u8..=35u8, 0..10)) -> Hand {
        let mut groups: Vec<Vec<u8>> = vec![];
        for v in values {
            match groups.last_mut() {
                Some(g) if g.last().copied() == Some(v - 1) => g.push(v),
                _ => groups.push(vec![v]),
            }
        }
        Hand::from_groups(groups).expect("grouped values form a valid hand")
    }
}

prop_compose! {
    fn arb_player()(hand in arb_hand(), money in 0u32..=11) -> PlayerState {
        PlayerState { hand, money }
    }
}

prop_compose! {
    fn arb_state()(
        card in 3u8..=35u8,
        pot in 0u32..=30u32,
        players in proptest::collection::vec(arb_player(), 1..=5),
    ) -> TableState {
        TableState { card, pot, finished: false, players }
    }
}

proptest! {
    #[test]
    fn decides_deterministically_without_mutating(state in arb_state(), turn in 0u32..40) {
        let engine = Heuristic::new();
        let before = state.clone();

        let first = engine.decide(&state, turn).expect("well-formed snapshot must decide");
        let second = engine.decide(&state, turn).expect("well-formed snapshot must decide");

        prop_assert_eq!(first, second);
        prop_assert_eq!(&state, &before);
    }

    #[test]
    fn coinless_player_always_takes(mut state in arb_state(), turn in 0u32..40) {
        state.players[0].money = 0;
        let engine = Heuristic::new();
        prop_assert_eq!(engine.decide(&state, turn).unwrap(), Action::TakeCard);
    }
}
