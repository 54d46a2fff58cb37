//! Battle state machine.
//!
//! `Battle` owns one battle from start to outcome. The caller drives it
//! through the player's operations and `resolve_enemy_turn`; each call runs
//! to completion and returns the events it produced, in order.
//!
//! ## Turn flow
//!
//! - Player turn start: turn counter +1, mana refilled, player effects tick,
//!   hand drawn up to size. A player stunned by the enemy skips straight to
//!   the enemy turn.
//! - Player acting: `play_card`, `discard`, `end_player_turn`. The turn ends
//!   by itself once the hand is empty or mana is 0, including right after
//!   the draw.
//! - Enemy turn: enemy effects tick, then one enemy action unless the enemy
//!   is stunned, then the next player turn starts.
//!
//! The battle ends the moment either side reaches 0 health, victory
//! checked first.
//!
//! ## Example
//!
//! ```
//! use card_battle::battle::{Battle, Phase};
//! use card_battle::cards::{Card, CardId, CardType};
//! use card_battle::catalog::{LevelDef, LevelId, StaticCatalog};
//! use card_battle::core::BattleConfig;
//! use card_battle::enemy::{EnemyDef, EnemyId};
//! use card_battle::progression::{MemoryStore, Progress};
//!
//! let catalog = StaticCatalog::new()
//!     .with_card(Card::new(CardId::new(1), "Strike", CardType::Attack, 1, 6))
//!     .with_enemy(EnemyDef::new(EnemyId::new(1), "Slime", 20, 5))
//!     .with_level(LevelDef::new(LevelId::new(1), "Forest", EnemyId::new(1)));
//!
//! let config = BattleConfig::default();
//! let progress = Progress::new(&config).with_starter_deck([CardId::new(1); 6]);
//! let mut store = MemoryStore::new();
//!
//! let (mut battle, _events) =
//!     Battle::start(&catalog, &mut store, progress, LevelId::new(1), config, 7).unwrap();
//! assert_eq!(battle.phase(), Phase::PlayerActing);
//! assert_eq!(battle.deck().hand().len(), 5);
//!
//! battle.play_card(0).unwrap();
//! assert_eq!(battle.enemy().vitals.health, 14);
//! ```

use tracing::{debug, info, warn};

use super::phase::{Outcome, Phase};
use crate::catalog::{Catalog, LevelDef, LevelId};
use crate::combat::{self, BattleContext};
use crate::core::{
    BattleAction, BattleConfig, BattleError, BattleRng, BattleState, Enemy, IdAllocator, Player, Result, Side,
};
use crate::effects::{tick_effects, ActiveEffects, EffectKind};
use crate::enemy::{self, EnemyAction, EnemyDef};
use crate::events::BattleEvent;
use crate::progression::{apply_victory_rewards, check_achievements, Progress, ProgressStore};
use crate::zones::{DeckZones, Pile};

/// One battle against one enemy.
pub struct Battle<C: Catalog, S: ProgressStore> {
    catalog: C,
    store: S,
    ctx: BattleContext,
    enemy_def: EnemyDef,
    level: LevelDef,
    progress: Progress,
}

impl<C: Catalog, S: ProgressStore> Battle<C, S> {
    /// Start a battle on `level_id` and run the first player turn start.
    ///
    /// Health and mana are reset to max, the equipped deck is shuffled into
    /// the draw pile and the first hand is drawn.
    pub fn start(
        catalog: C,
        store: S,
        progress: Progress,
        level_id: LevelId,
        config: BattleConfig,
        seed: u64,
    ) -> Result<(Self, Vec<BattleEvent>)> {
        let level = catalog
            .level(level_id)
            .cloned()
            .ok_or(BattleError::UnknownLevel(level_id))?;
        if !progress.is_unlocked(level_id) {
            return Err(BattleError::LevelLocked(level_id));
        }
        let enemy_def = catalog
            .enemy(level.enemy)
            .cloned()
            .ok_or(BattleError::UnknownEnemy(level.enemy))?;

        let mut ids = IdAllocator::new();
        let cards = progress.deck_from_equipped(&catalog, &mut ids)?;

        let mut player = progress.player.clone();
        player.vitals.restore();
        player.refill_mana();

        let mut rng = BattleRng::new(seed);
        let mut deck = DeckZones::new(cards);
        deck.shuffle(Pile::Draw, &mut rng);

        let mut ctx = BattleContext::new(player, Enemy::from_def(&enemy_def), deck, rng, config);
        ctx.ids = ids;

        info!(
            level = %level_id,
            enemy = %enemy_def.name,
            deck = ctx.deck.total_cards(),
            seed,
            "battle started"
        );

        let mut battle = Self {
            catalog,
            store,
            ctx,
            enemy_def,
            level,
            progress,
        };
        let mut events = Vec::new();
        battle.begin_player_turn(&mut events);
        Ok((battle, events))
    }

    // === Player operations ===

    /// Play the hand card at `index`.
    ///
    /// On failure nothing changes. After a non-lethal play the turn ends by
    /// itself if the hand is empty or mana is spent.
    pub fn play_card(&mut self, index: usize) -> Result<Vec<BattleEvent>> {
        self.expect_phase(Phase::PlayerActing)?;

        let mut events = Vec::new();
        let instance = combat::play_card(&mut self.ctx, &self.catalog, index, &mut events)?;
        self.ctx.state.record(BattleAction::PlayCard {
            index,
            card: instance.card_id(),
            instance: instance.id,
        });

        if !self.check_outcome(&mut events) {
            self.end_turn_if_spent(&mut events);
        }
        Ok(events)
    }

    /// Move the hand card at `index` to the discard pile without playing it.
    pub fn discard(&mut self, index: usize) -> Result<Vec<BattleEvent>> {
        self.expect_phase(Phase::PlayerActing)?;

        let card = self.ctx.deck.discard(index)?.clone();
        debug!(%card, "card discarded");
        self.ctx.state.record(BattleAction::Discard {
            index,
            card: card.card_id(),
            instance: card.id,
        });

        let mut events = vec![BattleEvent::CardDiscarded {
            card: card.card_id(),
            instance: card.id,
        }];
        self.end_turn_if_spent(&mut events);
        Ok(events)
    }

    /// End the player's turn. The enemy turn is then resolved by
    /// `resolve_enemy_turn`.
    pub fn end_player_turn(&mut self) -> Result<Vec<BattleEvent>> {
        self.expect_phase(Phase::PlayerActing)?;

        let mut events = Vec::new();
        self.end_turn(false, &mut events);
        Ok(events)
    }

    // === Enemy turn ===

    /// Run the whole enemy turn and the next player turn start.
    pub fn resolve_enemy_turn(&mut self) -> Result<Vec<BattleEvent>> {
        self.expect_phase(Phase::EnemyTurnStart)?;

        let mut events = vec![BattleEvent::TurnStarted {
            side: Side::Enemy,
            turn: self.ctx.state.turn_count,
        }];

        if let Some(outcome) = tick_effects(&mut self.ctx, Side::Enemy, &mut events) {
            self.finish(outcome, &mut events);
            return Ok(events);
        }

        if self.ctx.consume(Side::Enemy, EffectKind::Stun, Side::Player, &mut events) {
            debug!(enemy = %self.ctx.enemy.id, "enemy stunned");
            events.push(BattleEvent::TurnSkipped { side: Side::Enemy });
        } else {
            self.ctx.state.phase = Phase::EnemyActing;
            let action = enemy::choose_action(&self.enemy_def, &mut self.ctx);
            if let Some(outcome) = enemy::execute_action(&mut self.ctx, &action, &mut events) {
                self.finish(outcome, &mut events);
                return Ok(events);
            }
        }

        self.ctx.state.phase = Phase::EnemyTurnEnd;
        events.push(BattleEvent::TurnEnded { side: Side::Enemy });

        self.begin_player_turn(&mut events);
        Ok(events)
    }

    // === Transitions ===

    fn begin_player_turn(&mut self, events: &mut Vec<BattleEvent>) {
        let ctx = &mut self.ctx;
        ctx.state.phase = Phase::PlayerTurnStart;
        ctx.state.turn_count += 1;
        events.push(BattleEvent::TurnStarted {
            side: Side::Player,
            turn: ctx.state.turn_count,
        });

        ctx.player.refill_mana();
        ctx.mana_changed(events);

        if let Some(outcome) = tick_effects(ctx, Side::Player, events) {
            self.finish(outcome, events);
            return;
        }

        if ctx.consume(Side::Player, EffectKind::Stun, Side::Enemy, events) {
            debug!(turn = ctx.state.turn_count, "player stunned");
            events.push(BattleEvent::TurnSkipped { side: Side::Player });
            ctx.state.phase = Phase::PlayerTurnEnd;
            events.push(BattleEvent::TurnEnded { side: Side::Player });
            ctx.state.phase = Phase::EnemyTurnStart;
            return;
        }

        let hand_size = ctx.config.hand_size;
        ctx.deck.draw_to_hand_size(hand_size, &mut ctx.rng, events);
        ctx.state.phase = Phase::PlayerActing;

        // Nothing to draw or no mana to spend: the turn is already over
        self.end_turn_if_spent(events);
    }

    fn end_turn_if_spent(&mut self, events: &mut Vec<BattleEvent>) {
        if self.ctx.deck.hand().is_empty() || self.ctx.player.mana == 0 {
            self.end_turn(true, events);
        }
    }

    fn end_turn(&mut self, automatic: bool, events: &mut Vec<BattleEvent>) {
        self.ctx.state.record(BattleAction::EndTurn { automatic });
        self.ctx.state.phase = Phase::PlayerTurnEnd;
        debug!(turn = self.ctx.state.turn_count, automatic, "player turn ended");
        events.push(BattleEvent::TurnEnded { side: Side::Player });
        self.ctx.state.phase = Phase::EnemyTurnStart;
    }

    /// Finish the battle if a side is down. Returns whether it did.
    fn check_outcome(&mut self, events: &mut Vec<BattleEvent>) -> bool {
        match self.ctx.outcome() {
            Some(outcome) => {
                self.finish(outcome, events);
                true
            }
            None => false,
        }
    }

    fn finish(&mut self, outcome: Outcome, events: &mut Vec<BattleEvent>) {
        self.ctx.state.phase = Phase::BattleOver(outcome);
        info!(%outcome, turns = self.ctx.state.turn_count, level = %self.level.id, "battle over");
        events.push(BattleEvent::BattleEnded { outcome });

        self.progress.player = self.ctx.player.clone();
        self.progress.stats.merge(&self.ctx.stats);

        if outcome == Outcome::Defeat {
            return;
        }

        let levels_count = self.catalog.levels_count();
        apply_victory_rewards(&mut self.progress, &self.level, &self.catalog, &self.ctx.config, events);
        check_achievements(&mut self.progress, levels_count, events);
        self.ctx.player = self.progress.player.clone();

        let success = self.store.save_progress(&self.progress);
        if !success {
            warn!(level = %self.level.id, "failed to save progress");
        }
        events.push(BattleEvent::ProgressSaved { success });
    }

    fn expect_phase(&self, expected: Phase) -> Result<()> {
        match self.ctx.state.phase {
            Phase::BattleOver(_) => Err(BattleError::BattleOver),
            phase if phase == expected => Ok(()),
            phase => Err(BattleError::WrongPhase { phase }),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.ctx.state.phase
    }

    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.ctx.state
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.ctx.player
    }

    #[must_use]
    pub fn enemy(&self) -> &Enemy {
        &self.ctx.enemy
    }

    #[must_use]
    pub fn enemy_def(&self) -> &EnemyDef {
        &self.enemy_def
    }

    #[must_use]
    pub fn level(&self) -> &LevelDef {
        &self.level
    }

    #[must_use]
    pub fn deck(&self) -> &DeckZones {
        &self.ctx.deck
    }

    #[must_use]
    pub fn effects(&self) -> &ActiveEffects {
        &self.ctx.state.effects
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.ctx.state.outcome()
    }

    /// The enemy's next action, when its behaviour is scripted.
    #[must_use]
    pub fn intent(&self) -> Option<EnemyAction> {
        enemy::intent(&self.enemy_def, self.ctx.state.turn_count)
    }

    /// Progress as of now. Battle results are folded in once it ends.
    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_progress(self) -> Progress {
        self.progress
    }
}
