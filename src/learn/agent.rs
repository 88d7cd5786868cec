//! The trained agent's query surface.

use crate::core::GameRng;
use crate::game::{Action, Nim};

use super::policy::EpsilonGreedy;
use super::table::QTable;

/// A trained Nim agent: the learned action-value table plus the policy
/// and RNG needed to query it.
///
/// This is the only surface an interactive layer consumes — it never
/// reads or writes the table directly.
#[derive(Clone, Debug)]
pub struct NimAgent {
    table: QTable,
    policy: EpsilonGreedy,
    rng: GameRng,
}

impl NimAgent {
    /// Wrap a trained table with the default query policy.
    ///
    /// The RNG breaks ties among equally-valued moves and drives
    /// exploration when a caller asks for it.
    #[must_use]
    pub fn new(table: QTable, rng: GameRng) -> Self {
        Self::with_policy(table, EpsilonGreedy::new(), rng)
    }

    /// Wrap a trained table with a specific query policy.
    #[must_use]
    pub fn with_policy(table: QTable, policy: EpsilonGreedy, rng: GameRng) -> Self {
        Self { table, policy, rng }
    }

    /// Pick a move for `position`, or `None` when the game is over.
    ///
    /// Interactive callers pass `explore = false` for the agent's best
    /// move; `true` keeps epsilon-greedy exploration on.
    pub fn choose_action(&mut self, position: &Nim, explore: bool) -> Option<Action> {
        self.policy
            .choose_action(&self.table, position, explore, &mut self.rng)
    }

    /// The learned action-value table.
    #[must_use]
    pub fn table(&self) -> &QTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_exploits_the_table() {
        let mut table = QTable::with_alpha(1.0);
        let game = Nim::with_piles(&[2]);
        table.update(game.piles(), Action::new(0, 2), 1.0, 0.0);

        let mut agent = NimAgent::new(table, GameRng::new(42));

        for _ in 0..10 {
            assert_eq!(agent.choose_action(&game, false), Some(Action::new(0, 2)));
        }
    }

    #[test]
    fn test_agent_none_on_terminal() {
        let mut agent = NimAgent::new(QTable::new(), GameRng::new(42));
        let terminal = Nim::with_piles(&[0, 0, 0, 0]);

        assert_eq!(agent.choose_action(&terminal, false), None);
    }
}
