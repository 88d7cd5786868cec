//! The Nim position and rules engine.
//!
//! A position is the vector of pile counts and nothing else: two positions
//! with identical counts are the same state regardless of how play reached
//! them. The engine enumerates legal moves, applies moves in place, and
//! reports terminality. Move randomization is the caller's job — the
//! enumeration order here is deterministic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::Action;
use super::error::IllegalMove;

/// Pile configuration: one token count per pile, index = pile identity.
///
/// Inline capacity covers the canonical four-pile game without allocation.
pub type Piles = SmallVec<[u32; 4]>;

/// A Nim position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nim {
    piles: Piles,
}

impl Nim {
    /// The canonical starting configuration.
    pub const DEFAULT_PILES: [u32; 4] = [1, 3, 5, 7];

    /// Start from the canonical configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_piles(&Self::DEFAULT_PILES)
    }

    /// Start from an arbitrary pile configuration.
    #[must_use]
    pub fn with_piles(piles: &[u32]) -> Self {
        Self {
            piles: SmallVec::from_slice(piles),
        }
    }

    /// The current pile configuration. Doubles as the state key: the
    /// action-value table is indexed by this value.
    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    /// Total tokens remaining across all piles.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.piles.iter().sum()
    }

    /// Enumerate every legal move: for each non-empty pile, every take in
    /// `1..=count`. Pile-major, take-ascending.
    ///
    /// Moves are generated fresh from the current configuration and must
    /// not be cached across positions.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(self.total() as usize);
        for (pile, &count) in self.piles.iter().enumerate() {
            for take in 1..=count {
                actions.push(Action::new(pile, take));
            }
        }
        actions
    }

    /// Apply a move, removing `action.take` tokens from `action.pile`.
    ///
    /// Validated defensively: the trainer only applies moves it just
    /// enumerated, but interactive callers may submit anything.
    pub fn apply(&mut self, action: Action) -> Result<(), IllegalMove> {
        let available = *self
            .piles
            .get(action.pile)
            .ok_or(IllegalMove::NoSuchPile {
                pile: action.pile,
                pile_count: self.piles.len(),
            })?;

        if action.take == 0 {
            return Err(IllegalMove::TakeZero { pile: action.pile });
        }
        if action.take > available {
            return Err(IllegalMove::TakeTooMany {
                pile: action.pile,
                take: action.take,
                available,
            });
        }

        self.piles[action.pile] -= action.take;
        Ok(())
    }

    /// True once every pile is empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.piles.iter().all(|&count| count == 0)
    }
}

impl Default for Nim {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Nim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, count) in self.piles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{count}")?;
        }
        write!(f, "]")
    }
}
