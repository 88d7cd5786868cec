//! Nim move representation.

use serde::{Deserialize, Serialize};

/// A single Nim move: remove `take` tokens from pile `pile`.
///
/// Moves are plain values — cheap to copy, hashable, and usable as map
/// keys alongside the position they were chosen in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Index of the pile to take from.
    pub pile: usize,
    /// Number of tokens removed, at least 1.
    pub take: u32,
}

impl Action {
    /// Create a move.
    #[must_use]
    pub const fn new(pile: usize, take: u32) -> Self {
        Self { pile, take }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from pile {}", self.take, self.pile)
    }
}
