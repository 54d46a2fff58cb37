//! Battle state.
//!
//! `BattleState` is the turn-level bookkeeping of one battle:
//! - Current phase of the turn machine
//! - Turn counter
//! - Active status effects
//! - Player action history
//!
//! Uses `im` persistent collections so a snapshot of the state is an O(1)
//! clone, which keeps event-driven observers and replays cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, BattleAction};
use crate::battle::{Outcome, Phase};
use crate::effects::ActiveEffects;

/// Turn-level state of one battle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BattleState {
    /// Current phase of the turn machine.
    pub phase: Phase,

    /// Number of player turns started so far (0 before the first turn).
    pub turn_count: u32,

    /// Status effects on both sides, in grant order.
    pub effects: ActiveEffects,

    /// Accepted player actions.
    pub history: Vector<ActionRecord>,
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleState {
    /// State at battle creation: `PlayerTurnStart`, no turns taken.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::PlayerTurnStart,
            turn_count: 0,
            effects: ActiveEffects::new(),
            history: Vector::new(),
        }
    }

    /// Whether the current phase belongs to the player.
    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.phase.is_player_phase()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.outcome() == Some(Outcome::Victory)
    }

    /// Final outcome, once the battle is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::BattleOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Append an action to the history for the current turn.
    pub fn record(&mut self, action: BattleAction) {
        self.history.push_back(ActionRecord::new(self.turn_count, action));
    }
}
