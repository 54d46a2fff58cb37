//! Turn-start effect tick.
//!
//! The single place where effect durations decay. Run once at the start of
//! each side's turn over the effects that side granted:
//!
//! 1. Apply the per-turn consequence (damage or heal) to the effect's target
//! 2. Decrement the duration
//! 3. Remove the effect once the duration reaches 0
//!
//! Effects are visited in grant order. A lethal tick stops the pass so the
//! turn machine can end the battle before anything else happens.

use tracing::debug;

use super::status::TickBehavior;
use crate::battle::Outcome;
use crate::combat::BattleContext;
use crate::core::Side;
use crate::events::{BattleEvent, DamageKind};

/// Tick every effect granted by `owner`.
///
/// Returns the battle outcome if a tick ended the battle.
pub fn tick_effects(ctx: &mut BattleContext, owner: Side, events: &mut Vec<BattleEvent>) -> Option<Outcome> {
    for id in ctx.state.effects.ids_from(owner) {
        // Earlier ticks may have removed later effects
        let Some(effect) = ctx.state.effects.get(id).cloned() else {
            continue;
        };

        match effect.kind.tick_behavior() {
            TickBehavior::Damage => {
                let lost = ctx.lose_health(effect.target, effect.value);
                debug!(%id, kind = %effect.kind, target = %effect.target, lost, "damage tick");
                events.push(BattleEvent::DamageDealt {
                    source: effect.source,
                    target: effect.target,
                    amount: lost,
                    absorbed: 0,
                    kind: DamageKind::Tick(effect.kind),
                });
            }
            TickBehavior::Heal => {
                ctx.restore_health(effect.target, effect.value, events);
            }
            TickBehavior::Reactive | TickBehavior::TurnGate => {}
        }

        if let Some(outcome) = ctx.outcome() {
            debug!(%id, ?outcome, "tick ended the battle");
            return Some(outcome);
        }

        if ctx.state.effects.decrement(id) == Some(0) {
            ctx.expire(id, events);
        }
    }
    None
}
