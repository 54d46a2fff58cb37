//! Battle sides.
//!
//! A battle always has exactly two participants: the player and a single
//! enemy. Effects record which side granted them (`source`) and which side
//! they afflict or benefit (`target`).

use serde::{Deserialize, Serialize};

/// One of the two participants of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The other participant.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(self, Side::Player)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
        assert_eq!(Side::Player.opponent().opponent(), Side::Player);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::Player), "player");
        assert_eq!(format!("{}", Side::Enemy), "enemy");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Side::Enemy).unwrap();
        assert_eq!(json, "\"enemy\"");
        let side: Side = serde_json::from_str("\"player\"").unwrap();
        assert_eq!(side, Side::Player);
    }
}
