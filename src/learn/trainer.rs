//! Self-play training with deferred credit assignment.
//!
//! The subtle part of tabular self-play is that a move's worth is unknown
//! at the moment it is made: it depends on the opponent's reply. Each
//! player therefore carries at most one pending move record. The ordinary
//! TD step values a player's *previous* move once the opponent's response
//! has been folded into the position, and the episode ends with two
//! immediate terminal updates — one per player's last recorded move.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Player, PlayerPair};
use crate::game::{Action, Nim, Piles};

use super::agent::NimAgent;
use super::policy::{best_future_reward, EpsilonGreedy, MovePolicy};
use super::table::QTable;

/// Training parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Number of self-play episodes.
    pub episodes: usize,

    /// Learning rate for TD updates.
    pub alpha: f64,

    /// Exploration probability during training.
    pub epsilon: f64,

    /// RNG seed. Same seed, same trained table.
    pub seed: u64,

    /// Starting pile configuration for every episode.
    pub piles: Vec<u32>,

    /// Episode interval for progress logging (0 disables).
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            episodes: 10_000,
            alpha: QTable::DEFAULT_ALPHA,
            epsilon: EpsilonGreedy::DEFAULT_EPSILON,
            seed: 42,
            piles: Nim::DEFAULT_PILES.to_vec(),
            log_every: 1_000,
        }
    }
}

impl TrainConfig {
    /// Create a config with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the episode count.
    #[must_use]
    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    /// Set the learning rate.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the exploration probability.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting pile configuration.
    #[must_use]
    pub fn with_piles(mut self, piles: &[u32]) -> Self {
        self.piles = piles.to_vec();
        self
    }

    /// Set the progress-logging interval (0 disables).
    #[must_use]
    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }
}

/// A player's pending (state, move) pair awaiting its TD update.
#[derive(Clone, Debug)]
struct MoveRecord {
    state: Piles,
    action: Action,
}

/// Self-play trainer.
///
/// Generic over the move policy so tests can drive episodes with a
/// scripted policy; training uses [`EpsilonGreedy`].
pub struct Trainer<P: MovePolicy = EpsilonGreedy> {
    config: TrainConfig,
    policy: P,
    table: QTable,
    rng: GameRng,
}

impl Trainer<EpsilonGreedy> {
    /// Trainer with the standard epsilon-greedy training policy.
    #[must_use]
    pub fn new(config: TrainConfig) -> Self {
        let policy = EpsilonGreedy::with_epsilon(config.epsilon);
        Self::with_policy(config, policy)
    }
}

impl<P: MovePolicy> Trainer<P> {
    /// Trainer with a custom move policy.
    #[must_use]
    pub fn with_policy(config: TrainConfig, policy: P) -> Self {
        let table = QTable::with_alpha(config.alpha);
        let rng = GameRng::new(config.seed);
        Self {
            config,
            policy,
            table,
            rng,
        }
    }

    /// Run every configured episode and return the trained agent.
    pub fn run(mut self) -> NimAgent {
        log::info!(
            "training {} episodes from {:?} (seed {})",
            self.config.episodes,
            self.config.piles,
            self.config.seed
        );

        for episode in 1..=self.config.episodes {
            self.play_episode();

            if self.config.log_every > 0 && episode % self.config.log_every == 0 {
                log::debug!(
                    "episode {}/{}: {} entries across {} states",
                    episode,
                    self.config.episodes,
                    self.table.len(),
                    self.table.states()
                );
            }
        }

        log::info!(
            "training complete: {} entries across {} states",
            self.table.len(),
            self.table.states()
        );

        let policy = EpsilonGreedy::with_epsilon(self.config.epsilon);
        NimAgent::with_policy(self.table, policy, self.rng)
    }

    /// One self-play episode.
    fn play_episode(&mut self) {
        let mut game = Nim::with_piles(&self.config.piles);
        let mut pending: PlayerPair<Option<MoveRecord>> = PlayerPair::default();
        let mut to_move = Player::One;

        while !game.is_terminal() {
            let state = game.piles().clone();
            let action = match self.policy.choose(&self.table, &game, &mut self.rng) {
                Some(action) => action,
                // A policy that cannot move ends the episode unrewarded.
                // Unreachable for epsilon-greedy: non-terminal positions
                // always offer a move.
                None => return,
            };
            game.apply(action).expect("policy chose an illegal move");

            // The mover's previous move can now be valued: the opponent's
            // reply is already folded into the position being looked at.
            if let Some(record) = &pending[to_move] {
                let future = best_future_reward(&self.table, &game);
                self.table.update(&record.state, record.action, 0.0, future);
            }

            pending[to_move] = Some(MoveRecord { state, action });
            to_move = to_move.opponent();
        }

        // `to_move` never got to act again: the opponent emptied the piles.
        // Normal play: the final mover wins, the player left to move loses.
        // A missing record (a one-move game) is skipped, never an error.
        let winner = to_move.opponent();
        if let Some(record) = &pending[winner] {
            self.table.update(&record.state, record.action, 1.0, 0.0);
        }
        if let Some(record) = &pending[to_move] {
            self.table.update(&record.state, record.action, -1.0, 0.0);
        }
    }
}

/// Train an agent with default parameters for `episodes` episodes.
///
/// A pure function of the episode count and the default seed; see
/// [`TrainConfig`] to vary the seed or the game.
#[must_use]
pub fn train(episodes: usize) -> NimAgent {
    Trainer::new(TrainConfig::default().with_episodes(episodes)).run()
}
