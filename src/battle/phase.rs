//! Turn phases and battle outcome.

use serde::{Deserialize, Serialize};

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Victory => f.write_str("Victory"),
            Outcome::Defeat => f.write_str("Defeat"),
        }
    }
}

/// Position in the turn cycle.
///
/// ```text
/// PlayerTurnStart -> PlayerActing -> PlayerTurnEnd
///   -> EnemyTurnStart -> EnemyActing -> EnemyTurnEnd -> PlayerTurnStart
/// ```
///
/// Any phase may end in `BattleOver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    PlayerTurnStart,
    PlayerActing,
    PlayerTurnEnd,
    EnemyTurnStart,
    EnemyActing,
    EnemyTurnEnd,
    BattleOver(Outcome),
}

impl Phase {
    /// Whether this phase is part of the player's turn.
    #[must_use]
    pub const fn is_player_phase(self) -> bool {
        matches!(self, Phase::PlayerTurnStart | Phase::PlayerActing | Phase::PlayerTurnEnd)
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Phase::BattleOver(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::PlayerTurnStart => f.write_str("PlayerTurnStart"),
            Phase::PlayerActing => f.write_str("PlayerActing"),
            Phase::PlayerTurnEnd => f.write_str("PlayerTurnEnd"),
            Phase::EnemyTurnStart => f.write_str("EnemyTurnStart"),
            Phase::EnemyActing => f.write_str("EnemyActing"),
            Phase::EnemyTurnEnd => f.write_str("EnemyTurnEnd"),
            Phase::BattleOver(outcome) => write!(f, "BattleOver({outcome})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_phases() {
        assert!(Phase::PlayerActing.is_player_phase());
        assert!(!Phase::EnemyTurnStart.is_player_phase());
        assert!(!Phase::BattleOver(Outcome::Victory).is_player_phase());
    }

    #[test]
    fn test_display() {
        assert_eq!(Phase::EnemyActing.to_string(), "EnemyActing");
        assert_eq!(Phase::BattleOver(Outcome::Defeat).to_string(), "BattleOver(Defeat)");
    }
}
