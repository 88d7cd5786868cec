//! Player identity and per-player data storage.
//!
//! Nim is a strictly alternating two-player game, so player identity is a
//! two-valued enum rather than an open-ended index, and per-player data
//! lives in a fixed two-slot [`PlayerPair`].

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two alternating players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 0-based slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use nim_rl::core::{Player, PlayerPair};
///
/// let mut wins: PlayerPair<u32> = PlayerPair::default();
/// wins[Player::One] += 1;
///
/// assert_eq!(wins[Player::One], 1);
/// assert_eq!(wins[Player::Two], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from both players' values, in turn order.
    #[must_use]
    pub fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::BOTH.iter().map(move |&p| (p, &self.data[p.index()]))
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_round_trips() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::One), "Player 1");
        assert_eq!(format!("{}", Player::Two), "Player 2");
    }

    #[test]
    fn test_pair_new_and_index() {
        let pair = PlayerPair::new(10, 20);

        assert_eq!(pair[Player::One], 10);
        assert_eq!(pair[Player::Two], 20);
    }

    #[test]
    fn test_pair_mutation() {
        let mut pair: PlayerPair<Option<i32>> = PlayerPair::default();

        pair[Player::Two] = Some(5);

        assert_eq!(pair[Player::One], None);
        assert_eq!(pair[Player::Two], Some(5));
    }

    #[test]
    fn test_pair_iter_order() {
        let pair = PlayerPair::new('a', 'b');
        let items: Vec<_> = pair.iter().collect();

        assert_eq!(items, vec![(Player::One, &'a'), (Player::Two, &'b')]);
    }

    #[test]
    fn test_pair_serialization() {
        let pair = PlayerPair::new(1, 2);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
