//! # nim-rl
//!
//! A tabular Q-learning engine for the combinatorial game of Nim.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every random decision flows through a seedable
//!    [`GameRng`] injected by the caller. The same configuration produces
//!    the same trained table.
//!
//! 2. **Total reads**: the action-value table never fails a lookup — an
//!    unseen (state, action) pair reads as 0.
//!
//! 3. **Deferred credit**: a move is valued only once its consequence is
//!    known, after the opponent replies or the game ends. The trainer
//!    keeps one pending move record per player and settles both at the
//!    terminal state.
//!
//! ## Modules
//!
//! - `core`: player identity, per-player storage, deterministic RNG
//! - `game`: Nim positions, legal moves, transitions, terminality
//! - `learn`: action-value table, epsilon-greedy policy, self-play trainer
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use nim_rl::game::Nim;
//! use nim_rl::learn::train;
//!
//! let mut agent = train(10_000);
//! let game = Nim::new();
//! let best = agent.choose_action(&game, false);
//! ```

pub mod core;
pub mod game;
pub mod learn;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Player, PlayerPair};

pub use crate::game::{Action, IllegalMove, Nim, Piles};

pub use crate::learn::{
    best_future_reward, train, EpsilonGreedy, MovePolicy, NimAgent, QTable, TrainConfig, Trainer,
};
