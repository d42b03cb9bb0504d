//! Players and player identity

use rand::Rng;
use serde::{Deserialize, Serialize};

/// RGBA color used for player tokens and the board view.
pub type Color = [f32; 4];

/// Opaque player identifier.
///
/// Ids are random so that players joining from different hosts never
/// collide; ordering is only used for stable map iteration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Generate a fresh random id.
    pub fn random() -> PlayerId {
        PlayerId(rand::random())
    }

    /// Generate a fresh id from the given source of randomness.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> PlayerId {
        PlayerId(rng.gen())
    }
}

impl From<u64> for PlayerId {
    fn from(raw: u64) -> PlayerId {
        PlayerId(raw)
    }
}

/// A participant in the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique id
    pub id: PlayerId,
    /// Display name
    pub name: String,
    /// Token color
    pub color: Color,
    /// Starting corner (row, col), fixed when the board is built
    pub home: (usize, usize),
    /// Targets reached so far
    pub score: u32,
}

impl Player {
    /// Create a new player with a random id and no score.
    pub fn new(name: impl Into<String>, color: Color) -> Player {
        Player {
            id: PlayerId::random(),
            name: name.into(),
            color,
            home: (0, 0),
            score: 0,
        }
    }

    /// Create a player with a caller-chosen id (deterministic setups).
    pub fn with_id(id: PlayerId, name: impl Into<String>, color: Color) -> Player {
        Player {
            id,
            name: name.into(),
            color,
            home: (0, 0),
            score: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_scoreless() {
        let player = Player::new("amy", [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(player.score, 0);
        assert_eq!(player.name, "amy");
    }

    #[test]
    fn test_with_id_is_deterministic() {
        let a = Player::with_id(PlayerId::from(7), "a", [0.0; 4]);
        let b = Player::with_id(PlayerId::from(7), "b", [0.0; 4]);
        assert_eq!(a.id, b.id);
    }
}
