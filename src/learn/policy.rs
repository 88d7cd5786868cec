//! Action selection policies.
//!
//! [`EpsilonGreedy`] is the production policy for both training and play.
//! The [`MovePolicy`] trait is the seam the trainer drives episodes
//! through, so tests can substitute a scripted policy and inspect the
//! credit assignment that results.

use crate::core::GameRng;
use crate::game::{Action, Nim};

use super::table::QTable;

/// Highest stored value among the legal moves of `position`, or 0.0 when
/// the position is terminal.
///
/// This is the one-step lookahead used as the `future` argument of
/// [`QTable::update`].
#[must_use]
pub fn best_future_reward(table: &QTable, position: &Nim) -> f64 {
    let actions = position.actions();
    if actions.is_empty() {
        return 0.0;
    }
    actions
        .into_iter()
        .map(|action| table.get(position.piles(), action))
        .fold(f64::MIN, f64::max)
}

/// Chooses the move an agent plays in a given position during training.
pub trait MovePolicy {
    /// Pick a move, or `None` if the position offers none.
    fn choose(&mut self, table: &QTable, position: &Nim, rng: &mut GameRng) -> Option<Action>;
}

/// Epsilon-greedy selection over an action-value table.
#[derive(Clone, Copy, Debug)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Default exploration probability.
    pub const DEFAULT_EPSILON: f64 = 0.1;

    /// Policy with the default exploration probability.
    #[must_use]
    pub fn new() -> Self {
        Self::with_epsilon(Self::DEFAULT_EPSILON)
    }

    /// Policy with a custom exploration probability in `0.0..=1.0`.
    #[must_use]
    pub fn with_epsilon(epsilon: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&epsilon),
            "epsilon must be in 0.0..=1.0"
        );
        Self { epsilon }
    }

    /// The exploration probability.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Pick a move for `position`, or `None` when it is terminal.
    ///
    /// With `explore`, a uniformly random legal move is taken with
    /// probability epsilon. Otherwise the highest-valued move wins, with
    /// uniform random tie-breaking. The random tie-break matters early in
    /// training, when every value is still 0 and first-found selection
    /// would bias play toward the first-enumerated move.
    pub fn choose_action(
        &self,
        table: &QTable,
        position: &Nim,
        explore: bool,
        rng: &mut GameRng,
    ) -> Option<Action> {
        let actions = position.actions();
        if actions.is_empty() {
            return None;
        }

        if explore && rng.gen_bool(self.epsilon) {
            return rng.choose(&actions).copied();
        }

        let max_q = actions
            .iter()
            .map(|&action| table.get(position.piles(), action))
            .fold(f64::MIN, f64::max);
        let best: Vec<Action> = actions
            .into_iter()
            .filter(|&action| table.get(position.piles(), action) == max_q)
            .collect();

        rng.choose(&best).copied()
    }
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for EpsilonGreedy {
    fn choose(&mut self, table: &QTable, position: &Nim, rng: &mut GameRng) -> Option<Action> {
        self.choose_action(table, position, true, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_future_reward_terminal_is_zero() {
        let mut table = QTable::new();
        // Table contents for other states must not leak into a terminal read.
        let start = Nim::new();
        table.update(start.piles(), Action::new(0, 1), 1.0, 0.0);

        let terminal = Nim::with_piles(&[0, 0, 0, 0]);
        assert_eq!(best_future_reward(&table, &terminal), 0.0);
    }

    #[test]
    fn test_best_future_reward_is_max_over_actions() {
        let mut table = QTable::with_alpha(1.0);
        let game = Nim::with_piles(&[2]);

        table.update(game.piles(), Action::new(0, 1), -1.0, 0.0);
        table.update(game.piles(), Action::new(0, 2), 0.75, 0.0);

        assert_eq!(best_future_reward(&table, &game), 0.75);
    }

    #[test]
    fn test_best_future_reward_all_negative() {
        let mut table = QTable::with_alpha(1.0);
        let game = Nim::with_piles(&[2]);

        table.update(game.piles(), Action::new(0, 1), -1.0, 0.0);
        table.update(game.piles(), Action::new(0, 2), -0.5, 0.0);

        // Unseen actions do not exist here; the max is genuinely negative.
        assert_eq!(best_future_reward(&table, &game), -0.5);
    }

    #[test]
    fn test_choose_none_on_terminal() {
        let table = QTable::new();
        let policy = EpsilonGreedy::new();
        let mut rng = GameRng::new(42);

        let terminal = Nim::with_piles(&[0, 0]);
        assert_eq!(policy.choose_action(&table, &terminal, true, &mut rng), None);
        assert_eq!(policy.choose_action(&table, &terminal, false, &mut rng), None);
    }

    #[test]
    fn test_greedy_picks_dominant_action() {
        let mut table = QTable::with_alpha(1.0);
        let game = Nim::with_piles(&[3]);
        table.update(game.piles(), Action::new(0, 2), 1.0, 0.0);

        let policy = EpsilonGreedy::new();
        let mut rng = GameRng::new(42);

        for _ in 0..20 {
            let chosen = policy.choose_action(&table, &game, false, &mut rng);
            assert_eq!(chosen, Some(Action::new(0, 2)));
        }
    }

    #[test]
    fn test_tie_breaking_is_random() {
        let table = QTable::new();
        let game = Nim::with_piles(&[2]);
        let policy = EpsilonGreedy::new();
        let mut rng = GameRng::new(42);

        // All values are 0, so both moves are tied at the max. Over many
        // greedy draws both must appear.
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let chosen = policy.choose_action(&table, &game, false, &mut rng).unwrap();
            seen.insert(chosen);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_full_exploration_stays_legal() {
        let table = QTable::new();
        let game = Nim::with_piles(&[1, 2]);
        let policy = EpsilonGreedy::with_epsilon(1.0);
        assert_eq!(policy.epsilon(), 1.0);
        let mut rng = GameRng::new(7);

        let legal = game.actions();
        for _ in 0..50 {
            let chosen = policy.choose_action(&table, &game, true, &mut rng).unwrap();
            assert!(legal.contains(&chosen));
        }
    }

    #[test]
    fn test_zero_epsilon_never_explores() {
        let mut table = QTable::with_alpha(1.0);
        let game = Nim::with_piles(&[3]);
        table.update(game.piles(), Action::new(0, 3), 1.0, 0.0);

        let policy = EpsilonGreedy::with_epsilon(0.0);
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            let chosen = policy.choose_action(&table, &game, true, &mut rng);
            assert_eq!(chosen, Some(Action::new(0, 3)));
        }
    }

    #[test]
    #[should_panic(expected = "epsilon must be in 0.0..=1.0")]
    fn test_rejects_out_of_range_epsilon() {
        let _ = EpsilonGreedy::with_epsilon(-0.1);
    }
}
