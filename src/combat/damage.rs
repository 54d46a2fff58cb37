//! Damage pipeline.
//!
//! `resolve_damage` runs an attack from one side into the other:
//!
//! 1. Attacker weakness reduces the base amount (floor 0)
//! 2. Defender shields absorb in grant order, broken shields are removed
//! 3. The rest comes off defender health (floor 0)
//! 4. Nothing landed: no counter damage
//! 5. Defender thorns return `min(landed, thorns)` to the attacker
//! 6. Defender reflect returns `landed * reflect / 100` to the attacker
//!
//! Counter damage runs steps 1 to 3 only, so it never bounces back again.

use tracing::debug;

use crate::combat::BattleContext;
use crate::core::Side;
use crate::effects::EffectKind;
use crate::events::{BattleEvent, DamageKind};

/// Result of one pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Amount after weakness, before shields.
    pub requested: u32,
    /// Amount taken by shields.
    pub absorbed: u32,
    /// Health actually lost by the defender.
    pub dealt: u32,
    /// Defender at 0 health afterwards.
    pub lethal: bool,
    /// Health lost by the attacker to thorns.
    pub thorns: u32,
    /// Health lost by the attacker to reflect.
    pub reflected: u32,
}

/// Steps 1-3 for one hit.
#[derive(Clone, Copy, Debug, Default)]
struct Hit {
    requested: u32,
    absorbed: u32,
    /// Damage that got past shields (may exceed remaining health).
    landed: u32,
    dealt: u32,
}

/// Run `base` damage from `attacker` into the opposing side.
pub fn resolve_damage(
    ctx: &mut BattleContext,
    base: u32,
    attacker: Side,
    events: &mut Vec<BattleEvent>,
) -> DamageOutcome {
    let defender = attacker.opponent();
    let hit = strike(ctx, base, attacker, DamageKind::Attack, events);

    let mut outcome = DamageOutcome {
        requested: hit.requested,
        absorbed: hit.absorbed,
        dealt: hit.dealt,
        lethal: !ctx.vitals(defender).is_alive(),
        thorns: 0,
        reflected: 0,
    };

    if hit.landed == 0 {
        return outcome;
    }

    let thorns = ctx.state.effects.total(defender, EffectKind::Thorns);
    if thorns > 0 {
        outcome.thorns = strike(ctx, hit.landed.min(thorns), defender, DamageKind::Thorns, events).dealt;
    }

    let reflect = ctx.state.effects.total(defender, EffectKind::Reflect);
    if reflect > 0 {
        let amount = u64::from(hit.landed) * u64::from(reflect) / 100;
        let amount = u32::try_from(amount).unwrap_or(u32::MAX);
        if amount > 0 {
            outcome.reflected = strike(ctx, amount, defender, DamageKind::Reflect, events).dealt;
        }
    }

    outcome
}

/// Heal `side` up to its max. No mitigation applies to healing.
pub fn heal(ctx: &mut BattleContext, side: Side, amount: u32, events: &mut Vec<BattleEvent>) -> u32 {
    ctx.restore_health(side, amount, events)
}

fn strike(
    ctx: &mut BattleContext,
    base: u32,
    attacker: Side,
    kind: DamageKind,
    events: &mut Vec<BattleEvent>,
) -> Hit {
    let defender = attacker.opponent();

    let weakness = ctx.state.effects.total(attacker, EffectKind::Weakness);
    let requested = base.saturating_sub(weakness);

    let (landed, absorbed) = absorb_with_shields(ctx, defender, requested, events);
    let dealt = if landed > 0 {
        ctx.lose_health(defender, landed)
    } else {
        0
    };

    debug!(%attacker, base, weakness, absorbed, dealt, ?kind, "damage resolved");
    events.push(BattleEvent::DamageDealt {
        source: attacker,
        target: defender,
        amount: dealt,
        absorbed,
        kind,
    });

    Hit {
        requested,
        absorbed,
        landed,
        dealt,
    }
}

/// Soak `amount` with `defender`'s shields in grant order.
///
/// Returns `(remaining, absorbed)`.
fn absorb_with_shields(
    ctx: &mut BattleContext,
    defender: Side,
    amount: u32,
    events: &mut Vec<BattleEvent>,
) -> (u32, u32) {
    let mut remaining = amount;
    let mut absorbed = 0;

    for id in ctx.state.effects.ids_of_kind(defender, EffectKind::Shield) {
        if remaining == 0 {
            break;
        }
        let Some(shield) = ctx.state.effects.get_mut(id) else {
            continue;
        };

        let soaked = remaining.min(shield.value);
        shield.value -= soaked;
        remaining -= soaked;
        absorbed += soaked;

        if shield.value == 0 {
            ctx.state.effects.remove(id);
            events.push(BattleEvent::EffectConsumed {
                id,
                kind: EffectKind::Shield,
                target: defender,
            });
        }
    }

    (remaining, absorbed)
}
