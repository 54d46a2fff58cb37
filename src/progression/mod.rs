//! Progression between battles.
//!
//! - `Progress`: Saved player profile, collection and statistics
//! - `grant_experience` / `apply_victory_rewards`: The reward ledger
//! - `Achievement`: One-time milestones
//! - `ProgressStore`: Storage contract, with an in-memory implementation

pub mod achievements;
pub mod ledger;
pub mod persistence;
pub mod profile;

pub use achievements::{check_achievements, Achievement};
pub use ledger::{apply_victory_rewards, grant_experience};
pub use persistence::{MemoryStore, PersistenceError, ProgressStore, SaveRecord};
pub use profile::{Progress, ProgressError, Statistics, PROGRESS_VERSION};
