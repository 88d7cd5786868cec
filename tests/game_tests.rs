//! Integration and property tests for the Nim rules engine.

use nim_rl::game::{Action, IllegalMove, Nim};
use proptest::prelude::*;

#[test]
fn terminal_fixtures() {
    assert!(Nim::with_piles(&[0, 0, 0, 0]).is_terminal());
    assert!(!Nim::with_piles(&[1, 3, 5, 7]).is_terminal());
}

#[test]
fn apply_is_defensive_against_arbitrary_input() {
    let mut game = Nim::with_piles(&[3]);

    assert!(matches!(
        game.apply(Action::new(9, 1)),
        Err(IllegalMove::NoSuchPile { .. })
    ));
    assert!(matches!(
        game.apply(Action::new(0, 0)),
        Err(IllegalMove::TakeZero { .. })
    ));
    assert!(matches!(
        game.apply(Action::new(0, 4)),
        Err(IllegalMove::TakeTooMany { .. })
    ));

    // The position survives every rejection intact.
    assert_eq!(game.piles().as_slice(), &[3]);
}

proptest! {
    /// Every enumerated move stays within its pile's bounds, and the
    /// number of moves equals the token total.
    #[test]
    fn actions_are_within_pile_bounds(piles in prop::collection::vec(0u32..20, 0..6)) {
        let game = Nim::with_piles(&piles);
        let actions = game.actions();

        let total: u32 = piles.iter().sum();
        prop_assert_eq!(actions.len() as u32, total);

        for action in actions {
            prop_assert!(action.pile < piles.len());
            prop_assert!(action.take >= 1);
            prop_assert!(action.take <= piles[action.pile]);
        }
    }

    /// Applying a self-enumerated move never errors and decreases the
    /// token total by exactly the take.
    #[test]
    fn applying_enumerated_action_reduces_total(
        piles in prop::collection::vec(1u32..20, 1..6),
        idx in any::<prop::sample::Index>(),
    ) {
        let mut game = Nim::with_piles(&piles);
        let actions = game.actions();
        let action = actions[idx.index(actions.len())];

        let before = game.total();
        game.apply(action).unwrap();

        prop_assert_eq!(game.total(), before - action.take);
    }

    /// Playing enumerated moves always reaches the terminal state.
    #[test]
    fn random_playout_terminates(
        piles in prop::collection::vec(0u32..10, 1..5),
        seed in any::<u64>(),
    ) {
        use nim_rl::core::GameRng;

        let mut game = Nim::with_piles(&piles);
        let mut rng = GameRng::new(seed);

        let mut moves = 0u32;
        while !game.is_terminal() {
            let actions = game.actions();
            let action = *rng.choose(&actions).unwrap();
            game.apply(action).unwrap();
            moves += 1;
        }

        prop_assert!(moves <= piles.iter().sum::<u32>());
        prop_assert_eq!(game.total(), 0);
    }
}
