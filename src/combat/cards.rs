//! Card resolution.
//!
//! `play_card` validates a hand card, pays for it, moves it to the discard
//! pile and resolves it:
//!
//! - Attack: value plus player strength (doubled by a pending double-next)
//!   through the damage pipeline, then an optional status rider on the enemy
//! - Defense: a shield of value, then an optional helpful rider or fortify
//! - Skill: heal, draw, strength, mana, weaken or double-next
//! - Item: gold, max health, max mana or hand transform
//!
//! Secondary bonuses run after the primary effect. Resolution stops as soon
//! as the enemy is down.

use std::sync::Arc;

use tracing::{debug, warn};

use super::damage::{heal, resolve_damage};
use crate::catalog::Catalog;
use crate::cards::{Card, CardBonus, CardEffect, CardInstance, CardType};
use crate::combat::BattleContext;
use crate::core::{BattleError, Result, Side};
use crate::effects::EffectKind;
use crate::events::{BattleEvent, DamageKind};

/// Play the hand card at `index`.
///
/// Fails without touching any state on a bad index, missing mana, or an
/// attack card while disarmed. Returns the played instance.
pub fn play_card<C: Catalog + ?Sized>(
    ctx: &mut BattleContext,
    catalog: &C,
    index: usize,
    events: &mut Vec<BattleEvent>,
) -> Result<CardInstance> {
    let instance = ctx.deck.hand_card(index)?.clone();

    let cost = instance.mana_cost();
    if ctx.player.mana < cost {
        return Err(BattleError::InsufficientMana {
            cost,
            available: ctx.player.mana,
        });
    }
    if instance.card.is_attack()
        && ctx.state.effects.has_from(Side::Player, EffectKind::Disarm, Side::Enemy)
    {
        return Err(BattleError::Disarmed);
    }

    ctx.player.mana -= cost;
    ctx.deck.discard(index)?;
    ctx.stats.cards_played += 1;

    debug!(card = %instance, cost, "card played");
    events.push(BattleEvent::CardPlayed {
        card: instance.card_id(),
        instance: instance.id,
        mana_spent: cost,
    });
    ctx.mana_changed(events);

    let card = Arc::clone(&instance.card);
    match card.card_type {
        CardType::Attack => resolve_attack(ctx, &card, events),
        CardType::Defense => resolve_defense(ctx, &card, events),
        CardType::Skill => resolve_skill(ctx, &card, events),
        CardType::Item => resolve_item(ctx, catalog, &card, events),
    }

    for bonus in &card.bonuses {
        if ctx.outcome().is_some() {
            break;
        }
        apply_bonus(ctx, bonus, events);
    }

    Ok(instance)
}

/// The card's effect tag, if it belongs to the card's type.
fn effect_of(card: &Card) -> Option<CardEffect> {
    let effect = card.effect?;
    if effect.card_type() == card.card_type {
        Some(effect)
    } else {
        warn!(card = %card.id, ?effect, card_type = ?card.card_type, "effect tag does not apply to card type");
        None
    }
}

/// Grant the status a rider tag stands for, with the card's overrides.
fn grant_rider(ctx: &mut BattleContext, card: &Card, effect: CardEffect, events: &mut Vec<BattleEvent>) {
    let Some((kind, value, duration)) = effect.rider() else {
        return;
    };
    let value = card.effect_value.unwrap_or(value);
    let duration = card.effect_duration.unwrap_or(duration);
    ctx.grant(kind, value, duration, Side::Player, kind.target_for(Side::Player), events);
}

fn resolve_attack(ctx: &mut BattleContext, card: &Card, events: &mut Vec<BattleEvent>) {
    let strength = ctx.state.effects.total(Side::Player, EffectKind::Strength);
    let mut amount = card.value.saturating_add(strength);
    if ctx.consume(Side::Player, EffectKind::DoubleNext, Side::Player, events) {
        amount = amount.saturating_mul(2);
    }

    let outcome = resolve_damage(ctx, amount, Side::Player, events);
    ctx.stats.damage_dealt += u64::from(outcome.dealt);
    if ctx.outcome().is_some() {
        return;
    }

    if let Some(effect) = effect_of(card) {
        grant_rider(ctx, card, effect, events);
    }
}

fn resolve_defense(ctx: &mut BattleContext, card: &Card, events: &mut Vec<BattleEvent>) {
    let duration = card.duration.unwrap_or(1);
    ctx.grant(EffectKind::Shield, card.value, duration, Side::Player, Side::Player, events);

    match effect_of(card) {
        Some(CardEffect::Fortify) => {
            let amount = card.effect_value.unwrap_or(5);
            ctx.player.vitals.raise_max(amount);
            events.push(BattleEvent::MaxHealthChanged {
                target: Side::Player,
                max_health: ctx.player.vitals.max_health,
            });
        }
        Some(effect) => grant_rider(ctx, card, effect, events),
        None => {}
    }
}

fn resolve_skill(ctx: &mut BattleContext, card: &Card, events: &mut Vec<BattleEvent>) {
    match effect_of(card) {
        Some(CardEffect::Heal) => {
            let healed = heal(ctx, Side::Player, card.value, events);
            ctx.stats.healing += u64::from(healed);
        }
        Some(CardEffect::Draw) => {
            let count = card.value_or(1) as usize;
            ctx.deck.draw(count, &mut ctx.rng, events);
        }
        Some(CardEffect::Strength) => {
            let duration = card.effect_duration.unwrap_or(3);
            ctx.grant(EffectKind::Strength, card.value_or(2), duration, Side::Player, Side::Player, events);
        }
        Some(CardEffect::Mana) => {
            ctx.player.restore_mana(card.value_or(1));
            ctx.mana_changed(events);
        }
        Some(CardEffect::Weaken) => {
            ctx.enemy.attack = ctx.enemy.attack.saturating_sub(card.value_or(1));
            events.push(BattleEvent::EnemyAttackChanged { attack: ctx.enemy.attack });
        }
        Some(CardEffect::DoubleNext) => {
            ctx.grant(EffectKind::DoubleNext, 0, 1, Side::Player, Side::Player, events);
        }
        _ => debug!(card = %card.id, "skill card has no effect"),
    }
}

fn resolve_item<C: Catalog + ?Sized>(
    ctx: &mut BattleContext,
    catalog: &C,
    card: &Card,
    events: &mut Vec<BattleEvent>,
) {
    match effect_of(card) {
        Some(CardEffect::Gold) => {
            let amount = card.value_or(10);
            ctx.player.gold = ctx.player.gold.saturating_add(amount);
            ctx.stats.gold_earned += u64::from(amount);
            events.push(BattleEvent::GoldGained { amount });
        }
        Some(CardEffect::MaxHealth) => {
            ctx.player.vitals.raise_max(card.value_or(5));
            events.push(BattleEvent::MaxHealthChanged {
                target: Side::Player,
                max_health: ctx.player.vitals.max_health,
            });
        }
        Some(CardEffect::MaxMana) => {
            ctx.player.raise_max_mana(card.value_or(1));
            ctx.mana_changed(events);
        }
        Some(CardEffect::Transform) => transform_hand(ctx, catalog, events),
        _ => debug!(card = %card.id, "item card has no effect"),
    }
}

/// Replace every hand card with a fresh copy of a random catalog card.
fn transform_hand<C: Catalog + ?Sized>(ctx: &mut BattleContext, catalog: &C, events: &mut Vec<BattleEvent>) {
    let ids = catalog.card_ids();
    if ids.is_empty() {
        warn!("transform with an empty catalog");
        return;
    }

    let mut cards = Vec::with_capacity(ctx.deck.hand().len());
    for index in 0..ctx.deck.hand().len() {
        let Some(&id) = ctx.rng.choose(&ids) else {
            continue;
        };
        let Some(card) = catalog.card(id) else {
            continue;
        };
        let instance = CardInstance::new(ctx.ids.next_instance(), Arc::clone(card));
        if ctx.deck.replace_hand_card(index, instance).is_ok() {
            cards.push(id);
        }
    }
    events.push(BattleEvent::HandTransformed { cards });
}

fn apply_bonus(ctx: &mut BattleContext, bonus: &CardBonus, events: &mut Vec<BattleEvent>) {
    match *bonus {
        CardBonus::Damage { value } => {
            let amount = ctx.lose_health(Side::Enemy, value);
            ctx.stats.damage_dealt += u64::from(amount);
            events.push(BattleEvent::DamageDealt {
                source: Side::Player,
                target: Side::Enemy,
                amount,
                absorbed: 0,
                kind: DamageKind::Bonus,
            });
        }
        CardBonus::Heal { value } => {
            let healed = heal(ctx, Side::Player, value, events);
            ctx.stats.healing += u64::from(healed);
        }
        CardBonus::Shield { value, duration } => {
            ctx.grant(EffectKind::Shield, value, duration.unwrap_or(1), Side::Player, Side::Player, events);
        }
        CardBonus::Draw { count } => {
            ctx.deck.draw(count.max(1) as usize, &mut ctx.rng, events);
        }
        CardBonus::Mana { value } => {
            ctx.player.restore_mana(value);
            ctx.mana_changed(events);
        }
        CardBonus::Status { kind, value, duration } => {
            ctx.grant(kind, value, duration, Side::Player, kind.target_for(Side::Player), events);
        }
    }
}
