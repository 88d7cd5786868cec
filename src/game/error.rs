//! Error types for the Nim rules engine.

use thiserror::Error;

/// A move rejected by [`Nim::apply`](super::Nim::apply).
///
/// The training loop never produces these (it applies only moves it just
/// enumerated); interactive callers recover by re-prompting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("no such pile: {pile} (position has {pile_count} piles)")]
    NoSuchPile { pile: usize, pile_count: usize },

    #[error("must take at least one token from pile {pile}")]
    TakeZero { pile: usize },

    #[error("cannot take {take} from pile {pile} holding {available}")]
    TakeTooMany {
        pile: usize,
        take: u32,
        available: u32,
    },
}
