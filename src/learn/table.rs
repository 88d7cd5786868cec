//! The tabular action-value store.
//!
//! Q-values are keyed by (position, move). Reads are total: a pair that
//! has never been updated reads as 0, which removes the whole class of
//! missing-entry errors a raw map lookup would invite.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::game::{Action, Piles};

/// Tabular action-value estimates with TD(0) updates.
///
/// One table is created before training, mutated by the trainer across
/// all episodes, and then lives inside the trained agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    values: FxHashMap<Piles, FxHashMap<Action, f64>>,
    alpha: f64,
}

impl QTable {
    /// Default learning rate.
    pub const DEFAULT_ALPHA: f64 = 0.5;

    /// Create a table with the default learning rate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_alpha(Self::DEFAULT_ALPHA)
    }

    /// Create a table with a custom learning rate in `0.0..=1.0`.
    #[must_use]
    pub fn with_alpha(alpha: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&alpha),
            "alpha must be in 0.0..=1.0"
        );
        Self {
            values: FxHashMap::default(),
            alpha,
        }
    }

    /// The learning rate.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Stored estimate for (state, action), or 0.0 if never updated.
    /// Never fails.
    #[must_use]
    pub fn get(&self, state: &Piles, action: Action) -> f64 {
        self.values
            .get(state)
            .and_then(|entries| entries.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    /// TD(0) update: `new = old + alpha * ((reward + future) - old)`.
    ///
    /// `old` is re-read here rather than taken from the caller, so the
    /// stored value can never be a stale snapshot.
    pub fn update(&mut self, state: &Piles, action: Action, reward: f64, future: f64) {
        let old = self.get(state, action);
        let new = old + self.alpha * ((reward + future) - old);
        self.values
            .entry(state.clone())
            .or_default()
            .insert(action, new);
    }

    /// Number of (state, action) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.values().map(|entries| entries.len()).sum()
    }

    /// True if no entry has ever been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of distinct states seen.
    #[must_use]
    pub fn states(&self) -> usize {
        self.values.len()
    }
}

impl Default for QTable {
    fn default() -> Self {
        Self::new()
    }
}
