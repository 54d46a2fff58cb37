//! The battle state machine.
//!
//! - `Battle`: Owns one battle and exposes the turn operations
//! - `Phase`: Position in the turn cycle
//! - `Outcome`: Victory or defeat

pub mod machine;
pub mod phase;

pub use machine::Battle;
pub use phase::{Outcome, Phase};
