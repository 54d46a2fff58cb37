//! Battle context: the mutable world of one battle.
//!
//! `BattleContext` bundles everything a battle mutates (turn state, both
//! combatants, deck zones, RNG, running statistics) so the pipelines can
//! take it by `&mut` instead of reaching for shared state. The `Battle`
//! machine owns exactly one context for the battle's lifetime.

use tracing::{debug, warn};

use crate::battle::Outcome;
use crate::core::{BattleConfig, BattleRng, BattleState, EffectId, Enemy, IdAllocator, Player, Side, Vitals};
use crate::effects::{EffectKind, StatusEffect};
use crate::events::BattleEvent;
use crate::progression::Statistics;
use crate::zones::DeckZones;

/// Everything a battle mutates.
#[derive(Clone, Debug)]
pub struct BattleContext {
    pub state: BattleState,
    pub player: Player,
    pub enemy: Enemy,
    pub deck: DeckZones,
    pub rng: BattleRng,
    pub ids: IdAllocator,
    /// Statistics accrued during this battle only. Damage and healing
    /// count card effects, not ticks or counter damage.
    pub stats: Statistics,
    pub config: BattleConfig,
}

impl BattleContext {
    #[must_use]
    pub fn new(player: Player, enemy: Enemy, deck: DeckZones, rng: BattleRng, config: BattleConfig) -> Self {
        Self {
            state: BattleState::new(),
            player,
            enemy,
            deck,
            rng,
            ids: IdAllocator::new(),
            stats: Statistics::default(),
            config,
        }
    }

    #[must_use]
    pub fn vitals(&self, side: Side) -> &Vitals {
        match side {
            Side::Player => &self.player.vitals,
            Side::Enemy => &self.enemy.vitals,
        }
    }

    pub fn vitals_mut(&mut self, side: Side) -> &mut Vitals {
        match side {
            Side::Player => &mut self.player.vitals,
            Side::Enemy => &mut self.enemy.vitals,
        }
    }

    /// Remove health from `side`, clamped at 0. Returns health lost.
    pub fn lose_health(&mut self, side: Side, amount: u32) -> u32 {
        self.vitals_mut(side).take_damage(amount)
    }

    /// Heal `side` up to max and emit `Healed`. Returns health restored.
    pub fn restore_health(&mut self, side: Side, amount: u32, events: &mut Vec<BattleEvent>) -> u32 {
        let healed = self.vitals_mut(side).heal(amount);
        events.push(BattleEvent::Healed { target: side, amount: healed });
        healed
    }

    /// Grant a status effect.
    ///
    /// Enemy strength is added to the enemy attack stat at grant time and
    /// taken back out when it expires. Grants with zero duration are
    /// dropped, since an active effect always has turns left.
    pub fn grant(
        &mut self,
        kind: EffectKind,
        value: u32,
        duration: u32,
        source: Side,
        target: Side,
        events: &mut Vec<BattleEvent>,
    ) -> Option<EffectId> {
        if duration == 0 {
            warn!(%kind, %source, %target, "ignoring status grant with zero duration");
            return None;
        }

        let id = self.ids.next_effect();
        let effect = StatusEffect::new(id, kind, value, duration, source, target);
        debug!(%id, %kind, value, duration, %source, %target, "effect applied");
        self.state.effects.push(effect.clone());
        events.push(BattleEvent::EffectApplied { effect });

        if kind == EffectKind::Strength && target == Side::Enemy {
            self.enemy.attack = self.enemy.attack.saturating_add(value);
            events.push(BattleEvent::EnemyAttackChanged { attack: self.enemy.attack });
        }
        Some(id)
    }

    /// Remove an effect whose duration ran out.
    pub fn expire(&mut self, id: EffectId, events: &mut Vec<BattleEvent>) {
        let Some(effect) = self.state.effects.remove(id) else {
            return;
        };

        debug!(%id, kind = %effect.kind, target = %effect.target, "effect expired");
        events.push(BattleEvent::EffectExpired {
            id,
            kind: effect.kind,
            target: effect.target,
        });

        if effect.kind == EffectKind::Strength && effect.target == Side::Enemy {
            self.enemy.attack = self.enemy.attack.saturating_sub(effect.value);
            events.push(BattleEvent::EnemyAttackChanged { attack: self.enemy.attack });
        }
    }

    /// Remove the oldest `kind` effect on `target` granted by `source`,
    /// emitting `EffectConsumed`. Returns whether one was found.
    pub fn consume(&mut self, target: Side, kind: EffectKind, source: Side, events: &mut Vec<BattleEvent>) -> bool {
        match self.state.effects.take_first(target, kind, source) {
            Some(effect) => {
                events.push(BattleEvent::EffectConsumed {
                    id: effect.id,
                    kind: effect.kind,
                    target: effect.target,
                });
                true
            }
            None => false,
        }
    }

    /// Victory if the enemy is down, else defeat if the player is down.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.enemy.vitals.is_alive() {
            Some(Outcome::Victory)
        } else if !self.player.vitals.is_alive() {
            Some(Outcome::Defeat)
        } else {
            None
        }
    }

    /// Emit the current mana after a change.
    pub fn mana_changed(&self, events: &mut Vec<BattleEvent>) {
        events.push(BattleEvent::ManaChanged {
            mana: self.player.mana,
            max_mana: self.player.max_mana,
        });
    }
}
