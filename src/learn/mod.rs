//! The learning stack: action-value table, policies, and the self-play
//! trainer.
//!
//! ## Overview
//!
//! - [`QTable`]: tabular (state, action) value estimates, TD(0) updates
//! - [`EpsilonGreedy`]: explore with probability epsilon, otherwise
//!   exploit with random tie-breaking
//! - [`Trainer`]: self-play episodes with deferred credit assignment
//! - [`NimAgent`]: the trained agent an interactive layer queries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nim_rl::learn::{TrainConfig, Trainer};
//!
//! let agent = Trainer::new(TrainConfig::default().with_episodes(10_000)).run();
//! let best = agent.choose_action(&game, false);
//! ```

pub mod agent;
pub mod policy;
pub mod table;
pub mod trainer;

pub use agent::NimAgent;
pub use policy::{best_future_reward, EpsilonGreedy, MovePolicy};
pub use table::QTable;
pub use trainer::{train, TrainConfig, Trainer};
