//! Cross-cutting primitives: player identity, per-player storage, and
//! deterministic RNG.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerPair};
pub use rng::{GameRng, GameRngState};
