//! Enemies: definitions and the decision procedure.
//!
//! - `EnemyDef`: Static enemy data with its behaviour script
//! - `EnemyAction`: One enemy move (attack, heal, buff, debuff, special)
//! - `choose_action` / `execute_action`: Pick and carry out this turn's move

pub mod decision;
pub mod definition;

pub use decision::{choose_action, execute_action, intent};
pub use definition::{
    BuffKind, Condition, ConditionedAction, DebuffKind, EnemyAction, EnemyBehavior, EnemyDef, EnemyId, Rider,
    RiderKind, SpecialAction, StatusDefaults,
};
