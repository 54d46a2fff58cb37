//! Enemy decision procedure.
//!
//! `choose_action` picks the enemy's move for this turn from its behaviour
//! script and `execute_action` carries it out against the battle context.
//! Both draw randomness from the battle RNG only, so a seeded battle
//! replays identically.

use smallvec::SmallVec;
use tracing::debug;

use super::definition::{Condition, EnemyAction, EnemyBehavior, EnemyDef, Rider, SpecialAction, StatusDefaults};
use crate::battle::Outcome;
use crate::combat::{resolve_damage, BattleContext};
use crate::core::Side;
use crate::events::{BattleEvent, DamageKind};

const DEFAULT_HEAL: u32 = 10;
const DEFAULT_HITS: u32 = 3;
const DEFAULT_SUMMON: u32 = 3;
const DEFAULT_LIFESTEAL_PERCENT: u32 = 50;
const DEFAULT_EXECUTE_THRESHOLD: u32 = 30;
const DEFAULT_DISRUPT: u32 = 1;

/// Pick the action `def` takes this turn.
pub fn choose_action(def: &EnemyDef, ctx: &mut BattleContext) -> EnemyAction {
    match &def.behavior {
        EnemyBehavior::Basic => EnemyAction::BASIC_ATTACK,
        EnemyBehavior::Pattern(patterns) => pattern_at(patterns, ctx.state.turn_count),
        EnemyBehavior::Conditional(actions) => {
            // Every condition is evaluated in order so random rolls stay
            // aligned with the seed.
            let mut passing: SmallVec<[EnemyAction; 4]> = SmallVec::new();
            for entry in actions {
                let passes = match entry.condition {
                    Some(condition) => condition_holds(condition, ctx),
                    None => true,
                };
                if passes {
                    passing.push(entry.action);
                }
            }

            match ctx.rng.index(passing.len()) {
                Some(i) => passing[i],
                None => EnemyAction::BASIC_ATTACK,
            }
        }
    }
}

/// The next action of a pattern enemy on `turn_count`, if it is scripted.
///
/// Conditional enemies decide at action time and have no preview.
#[must_use]
pub fn intent(def: &EnemyDef, turn_count: u32) -> Option<EnemyAction> {
    match &def.behavior {
        EnemyBehavior::Basic => Some(EnemyAction::BASIC_ATTACK),
        EnemyBehavior::Pattern(patterns) => Some(pattern_at(patterns, turn_count)),
        EnemyBehavior::Conditional(_) => None,
    }
}

fn pattern_at(patterns: &[EnemyAction], turn_count: u32) -> EnemyAction {
    if patterns.is_empty() {
        return EnemyAction::BASIC_ATTACK;
    }
    let slot = turn_count as usize % patterns.len();
    patterns[slot]
}

fn condition_holds(condition: Condition, ctx: &mut BattleContext) -> bool {
    let below = |health: u32, max: u32, percent: u32| u64::from(health) * 100 < u64::from(max) * u64::from(percent);

    match condition {
        Condition::HealthBelow(percent) => {
            below(ctx.enemy.vitals.health, ctx.enemy.vitals.max_health, percent)
        }
        Condition::HealthAbove(percent) => {
            u64::from(ctx.enemy.vitals.health) * 100 > u64::from(ctx.enemy.vitals.max_health) * u64::from(percent)
        }
        Condition::PlayerHealthBelow(percent) => {
            below(ctx.player.vitals.health, ctx.player.vitals.max_health, percent)
        }
        Condition::TurnCount(turns) => ctx.state.turn_count >= turns,
        Condition::Random(probability) => ctx.rng.chance(probability),
    }
}

/// Carry out `action`. Returns the outcome as soon as one side is down.
pub fn execute_action(
    ctx: &mut BattleContext,
    action: &EnemyAction,
    events: &mut Vec<BattleEvent>,
) -> Option<Outcome> {
    debug!(enemy = %ctx.enemy.id, ?action, "enemy acts");
    events.push(BattleEvent::EnemyActed { action: *action });

    match *action {
        EnemyAction::Attack { value, rider } => {
            let base = value.unwrap_or(ctx.enemy.attack);
            if let Some(outcome) = attack(ctx, base, events) {
                return Some(outcome);
            }
            if let Some(rider) = rider {
                grant_rider(ctx, rider, events);
            }
        }
        EnemyAction::Heal { value } => {
            ctx.restore_health(Side::Enemy, value.unwrap_or(DEFAULT_HEAL), events);
        }
        EnemyAction::Buff { buff, value, duration } => {
            grant_status(ctx, buff.defaults(), value, duration, Side::Enemy, events);
        }
        EnemyAction::Debuff { debuff, value, duration } => {
            grant_status(ctx, debuff.defaults(), value, duration, Side::Player, events);
        }
        EnemyAction::Special { special } => {
            if let Some(outcome) = special_action(ctx, special, events) {
                return Some(outcome);
            }
        }
    }

    ctx.outcome()
}

/// One hit through the damage pipeline. `Some` ends the action.
fn attack(ctx: &mut BattleContext, base: u32, events: &mut Vec<BattleEvent>) -> Option<Outcome> {
    resolve_damage(ctx, base, Side::Enemy, events);
    ctx.outcome()
}

fn grant_rider(ctx: &mut BattleContext, rider: Rider, events: &mut Vec<BattleEvent>) {
    grant_status(ctx, rider.kind.defaults(), rider.value, rider.duration, Side::Player, events);
}

fn grant_status(
    ctx: &mut BattleContext,
    (kind, default_value, default_duration): StatusDefaults,
    value: Option<u32>,
    duration: Option<u32>,
    target: Side,
    events: &mut Vec<BattleEvent>,
) {
    ctx.grant(
        kind,
        value.unwrap_or(default_value),
        duration.unwrap_or(default_duration),
        Side::Enemy,
        target,
        events,
    );
}

fn special_action(ctx: &mut BattleContext, special: SpecialAction, events: &mut Vec<BattleEvent>) -> Option<Outcome> {
    match special {
        SpecialAction::MultiAttack { count, value } => {
            let count = count.unwrap_or(DEFAULT_HITS);
            if count == 0 {
                return None;
            }
            let per_hit = value.unwrap_or(ctx.enemy.attack / count);
            for _ in 0..count {
                if let Some(outcome) = attack(ctx, per_hit, events) {
                    return Some(outcome);
                }
            }
        }
        SpecialAction::Summon { value } => {
            ctx.enemy.attack = ctx.enemy.attack.saturating_add(value.unwrap_or(DEFAULT_SUMMON));
            events.push(BattleEvent::EnemyAttackChanged { attack: ctx.enemy.attack });
        }
        SpecialAction::LifeSteal { value, percent } => {
            let damage = value.unwrap_or(ctx.enemy.attack);
            if let Some(outcome) = attack(ctx, damage, events) {
                return Some(outcome);
            }
            let percent = percent.unwrap_or(DEFAULT_LIFESTEAL_PERCENT);
            let stolen = u64::from(damage) * u64::from(percent) / 100;
            let stolen = u32::try_from(stolen).unwrap_or(u32::MAX);
            if stolen > 0 {
                ctx.restore_health(Side::Enemy, stolen, events);
            }
        }
        SpecialAction::Execute { threshold } => {
            let threshold = threshold.unwrap_or(DEFAULT_EXECUTE_THRESHOLD);
            let vitals = ctx.player.vitals;
            if u64::from(vitals.health) * 100 <= u64::from(vitals.max_health) * u64::from(threshold) {
                let dealt = ctx.lose_health(Side::Player, vitals.health);
                debug!(dealt, threshold, "player executed");
                events.push(BattleEvent::DamageDealt {
                    source: Side::Enemy,
                    target: Side::Player,
                    amount: dealt,
                    absorbed: 0,
                    kind: DamageKind::Execute,
                });
            } else {
                let base = ctx.enemy.attack;
                return attack(ctx, base, events);
            }
        }
        SpecialAction::Disrupt { count } => {
            for _ in 0..count.unwrap_or(DEFAULT_DISRUPT) {
                let Some(index) = ctx.rng.index(ctx.deck.hand().len()) else {
                    break;
                };
                if let Ok(card) = ctx.deck.discard(index) {
                    events.push(BattleEvent::CardDiscarded {
                        card: card.card_id(),
                        instance: card.id,
                    });
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, CardInstance, CardType};
    use crate::combat::context::tests::context;
    use crate::core::InstanceId;
    use crate::effects::EffectKind;
    use crate::enemy::{BuffKind, ConditionedAction, DebuffKind, EnemyId, RiderKind};
    use crate::zones::DeckZones;
    use std::sync::Arc;

    fn goblin(behavior: EnemyBehavior) -> EnemyDef {
        EnemyDef::new(EnemyId::new(1), "Goblin", 20, 5).with_behavior(behavior)
    }

    #[test]
    fn test_basic_always_attacks() {
        let mut ctx = context();
        let def = goblin(EnemyBehavior::Basic);
        assert_eq!(choose_action(&def, &mut ctx), EnemyAction::BASIC_ATTACK);
    }

    #[test]
    fn test_pattern_cycles_by_turn() {
        let mut ctx = context();
        let heal = EnemyAction::Heal { value: None };
        let def = goblin(EnemyBehavior::Pattern(vec![EnemyAction::BASIC_ATTACK, heal]));

        ctx.state.turn_count = 3;
        assert_eq!(choose_action(&def, &mut ctx), heal);
        ctx.state.turn_count = 4;
        assert_eq!(choose_action(&def, &mut ctx), EnemyAction::BASIC_ATTACK);
        assert_eq!(intent(&def, 5), Some(heal));
    }

    #[test]
    fn test_no_passing_condition_falls_back_to_attack() {
        let mut ctx = context();
        let def = goblin(EnemyBehavior::Conditional(vec![ConditionedAction::when(
            Condition::HealthBelow(50),
            EnemyAction::Heal { value: Some(8) },
        )]));

        // Full health: the heal is filtered out
        assert_eq!(choose_action(&def, &mut ctx), EnemyAction::BASIC_ATTACK);

        ctx.enemy.vitals.health = 9;
        assert_eq!(choose_action(&def, &mut ctx), EnemyAction::Heal { value: Some(8) });
        assert_eq!(intent(&def, 1), None);
    }

    #[test]
    fn test_turn_count_condition() {
        let mut ctx = context();
        let summon = EnemyAction::Special {
            special: SpecialAction::Summon { value: None },
        };
        let def = goblin(EnemyBehavior::Conditional(vec![ConditionedAction::when(
            Condition::TurnCount(3),
            summon,
        )]));

        ctx.state.turn_count = 2;
        assert_eq!(choose_action(&def, &mut ctx), EnemyAction::BASIC_ATTACK);
        ctx.state.turn_count = 3;
        assert_eq!(choose_action(&def, &mut ctx), summon);
    }

    #[test]
    fn test_attack_with_rider() {
        let mut ctx = context();
        let mut events = Vec::new();
        let action = EnemyAction::Attack {
            value: Some(7),
            rider: Some(Rider {
                kind: RiderKind::Poison,
                value: None,
                duration: None,
            }),
        };

        assert_eq!(execute_action(&mut ctx, &action, &mut events), None);
        assert_eq!(ctx.player.vitals.health, 93);

        let poison: Vec<_> = ctx.state.effects.of_kind(Side::Player, EffectKind::Poison).collect();
        assert_eq!(poison.len(), 1);
        assert_eq!((poison[0].value, poison[0].duration, poison[0].source), (2, 3, Side::Enemy));
    }

    #[test]
    fn test_buff_and_debuff_targets() {
        let mut ctx = context();
        let mut events = Vec::new();

        let buff = EnemyAction::Buff {
            buff: BuffKind::Strength,
            value: None,
            duration: None,
        };
        execute_action(&mut ctx, &buff, &mut events);
        assert_eq!(ctx.enemy.attack, 7);

        let debuff = EnemyAction::Debuff {
            debuff: DebuffKind::Disarm,
            value: None,
            duration: None,
        };
        execute_action(&mut ctx, &debuff, &mut events);
        assert!(ctx.state.effects.has_from(Side::Player, EffectKind::Disarm, Side::Enemy));
    }

    #[test]
    fn test_multi_attack_splits_attack() {
        let mut ctx = context();
        let mut events = Vec::new();
        ctx.enemy.attack = 9;

        let action = EnemyAction::Special {
            special: SpecialAction::MultiAttack { count: None, value: None },
        };
        execute_action(&mut ctx, &action, &mut events);
        assert_eq!(ctx.player.vitals.health, 91);

        let hits = events
            .iter()
            .filter(|e| matches!(e, BattleEvent::DamageDealt { kind: DamageKind::Attack, .. }))
            .count();
        assert_eq!(hits, 3);
    }

    #[test]
    fn test_multi_attack_stops_on_lethal_thorns() {
        let mut ctx = context();
        let mut events = Vec::new();
        ctx.enemy.vitals.health = 2;
        ctx.grant(EffectKind::Thorns, 5, 2, Side::Player, Side::Player, &mut events);

        let action = EnemyAction::Special {
            special: SpecialAction::MultiAttack { count: Some(3), value: Some(4) },
        };
        assert_eq!(execute_action(&mut ctx, &action, &mut events), Some(Outcome::Victory));
        // Only the first hit landed
        assert_eq!(ctx.player.vitals.health, 96);
    }

    #[test]
    fn test_life_steal_heals_from_nominal_damage() {
        let mut ctx = context();
        let mut events = Vec::new();
        ctx.enemy.vitals.health = 10;
        ctx.grant(EffectKind::Shield, 10, 1, Side::Player, Side::Player, &mut events);

        let action = EnemyAction::Special {
            special: SpecialAction::LifeSteal { value: Some(8), percent: None },
        };
        execute_action(&mut ctx, &action, &mut events);
        assert_eq!(ctx.player.vitals.health, 100);
        assert_eq!(ctx.enemy.vitals.health, 14);
    }

    #[test]
    fn test_execute_threshold() {
        let mut ctx = context();
        let mut events = Vec::new();
        let action = EnemyAction::Special {
            special: SpecialAction::Execute { threshold: None },
        };

        // Above 30%: plain attack
        ctx.player.vitals.health = 31;
        assert_eq!(execute_action(&mut ctx, &action, &mut events), None);
        assert_eq!(ctx.player.vitals.health, 26);

        ctx.player.vitals.health = 30;
        assert_eq!(execute_action(&mut ctx, &action, &mut events), Some(Outcome::Defeat));
        assert_eq!(ctx.player.vitals.health, 0);
    }

    #[test]
    fn test_disrupt_discards_random_cards() {
        let mut ctx = context();
        let mut events = Vec::new();
        let card = Arc::new(Card::new(CardId::new(1), "Strike", CardType::Attack, 1, 6));
        let cards = (0..3).map(|i| CardInstance::new(InstanceId::new(i), Arc::clone(&card))).collect();
        ctx.deck = DeckZones::new(cards);
        ctx.deck.draw(3, &mut ctx.rng, &mut events);

        let action = EnemyAction::Special {
            special: SpecialAction::Disrupt { count: Some(2) },
        };
        execute_action(&mut ctx, &action, &mut events);
        assert_eq!(ctx.deck.hand().len(), 1);
        assert_eq!(ctx.deck.discard_pile().len(), 2);
        assert_eq!(ctx.deck.total_cards(), 3);
    }
}
