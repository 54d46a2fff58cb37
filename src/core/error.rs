//! Battle error types.
//!
//! Every error here is a local rejection of one requested operation: the
//! battle state is left exactly as it was before the call.

use thiserror::Error;

use crate::battle::Phase;
use crate::cards::CardId;
use crate::catalog::LevelId;
use crate::enemy::EnemyId;

/// Reasons a battle operation is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("hand index {index} is out of range for a hand of {len} cards")]
    InvalidIndex { index: usize, len: usize },

    #[error("card costs {cost} mana but only {available} is available")]
    InsufficientMana { cost: u32, available: u32 },

    #[error("attack cards cannot be played while disarmed")]
    Disarmed,

    #[error("operation not allowed during {phase}")]
    WrongPhase { phase: Phase },

    #[error("the battle is already over")]
    BattleOver,

    #[error("unknown level {0}")]
    UnknownLevel(LevelId),

    #[error("level {0} is not unlocked")]
    LevelLocked(LevelId),

    #[error("unknown enemy {0}")]
    UnknownEnemy(EnemyId),

    #[error("unknown card {0}")]
    UnknownCard(CardId),
}

pub type Result<T> = std::result::Result<T, BattleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = BattleError::InsufficientMana { cost: 3, available: 1 };
        assert_eq!(err.to_string(), "card costs 3 mana but only 1 is available");

        let err = BattleError::UnknownLevel(LevelId::new(9));
        assert_eq!(err.to_string(), "unknown level Level(9)");

        let err = BattleError::WrongPhase { phase: Phase::EnemyActing };
        assert_eq!(err.to_string(), "operation not allowed during EnemyActing");
    }
}
