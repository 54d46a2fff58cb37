//! Progression ledger: experience, level-ups and victory rewards.

use tracing::{info, warn};

use super::profile::Progress;
use crate::catalog::{Catalog, LevelDef};
use crate::core::{BattleConfig, Player};
use crate::events::BattleEvent;

/// Add experience and apply every level-up it pays for.
///
/// Experience needed for the next level is `level * experience_per_level`
/// and is spent on each level-up, so one large grant can cascade through
/// several levels. Each level-up raises max health and max mana, and the
/// current values by the same amount. Returns the number of levels gained.
///
/// ## Example
///
/// ```
/// use card_battle::core::{BattleConfig, Player};
/// use card_battle::progression::grant_experience;
///
/// let config = BattleConfig::default();
/// let mut player = Player::new(&config);
/// player.experience = 95;
///
/// let gained = grant_experience(&mut player, 10, &config, &mut Vec::new());
/// assert_eq!(gained, 1);
/// assert_eq!((player.level, player.experience), (2, 5));
/// ```
pub fn grant_experience(
    player: &mut Player,
    amount: u32,
    config: &BattleConfig,
    events: &mut Vec<BattleEvent>,
) -> u32 {
    player.experience = player.experience.saturating_add(amount);
    events.push(BattleEvent::ExperienceGained { amount });

    let mut gained = 0;
    loop {
        let needed = config.experience_for_level(player.level);
        if needed == 0 || player.experience < needed {
            break;
        }

        player.experience -= needed;
        player.level += 1;
        player.vitals.raise_max(config.health_per_level);
        player.raise_max_mana(config.mana_per_level);
        gained += 1;

        info!(
            level = player.level,
            max_health = player.vitals.max_health,
            max_mana = player.max_mana,
            "level up"
        );
        events.push(BattleEvent::LeveledUp {
            level: player.level,
            max_health: player.vitals.max_health,
            max_mana: player.max_mana,
        });
    }
    gained
}

/// Pay out a won level: gold, experience, the next level and card rewards.
///
/// The next level unlocks only if it exists (`id < levels_count`) and is not
/// unlocked yet. Reward cards the catalog does not know are skipped.
pub fn apply_victory_rewards<C: Catalog + ?Sized>(
    progress: &mut Progress,
    level: &LevelDef,
    catalog: &C,
    config: &BattleConfig,
    events: &mut Vec<BattleEvent>,
) {
    let rewards = &level.rewards;

    progress.player.gold = progress.player.gold.saturating_add(rewards.gold);
    progress.stats.gold_earned += u64::from(rewards.gold);
    events.push(BattleEvent::GoldGained { amount: rewards.gold });

    grant_experience(&mut progress.player, rewards.experience, config, events);

    if level.id.raw() < catalog.levels_count() && progress.unlock(level.id.next()) {
        info!(level = %level.id.next(), "level unlocked");
        events.push(BattleEvent::LevelUnlocked { level: level.id.next() });
    }

    for &card in &rewards.cards {
        if catalog.card(card).is_none() {
            warn!(card = %card, level = %level.id, "reward card not in catalog");
            continue;
        }
        progress.add_card(card);
        events.push(BattleEvent::CardRewarded { card });
    }

    progress.stats.battles_won += 1;
}
