//! Achievements unlocked from progress milestones.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::profile::Progress;
use crate::events::BattleEvent;

/// A one-time milestone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    /// Win a battle.
    FirstVictory,
    /// Own 10 distinct cards.
    CardCollector,
    /// Deal 100 damage in total.
    DamageDealer,
    /// Heal 50 health in total.
    Healer,
    /// Earn 100 gold in total.
    Rich,
    /// Play 50 cards in total.
    CardMaster,
    /// Reach player level 5.
    Adventurer,
    /// Unlock every level.
    Conqueror,
}

impl Achievement {
    pub const ALL: [Achievement; 8] = [
        Achievement::FirstVictory,
        Achievement::CardCollector,
        Achievement::DamageDealer,
        Achievement::Healer,
        Achievement::Rich,
        Achievement::CardMaster,
        Achievement::Adventurer,
        Achievement::Conqueror,
    ];

    /// Whether `progress` meets this milestone.
    #[must_use]
    pub fn is_met(self, progress: &Progress, levels_count: u32) -> bool {
        match self {
            Achievement::FirstVictory => progress.stats.battles_won >= 1,
            Achievement::CardCollector => progress.distinct_cards() >= 10,
            Achievement::DamageDealer => progress.stats.damage_dealt >= 100,
            Achievement::Healer => progress.stats.healing >= 50,
            Achievement::Rich => progress.stats.gold_earned >= 100,
            Achievement::CardMaster => progress.stats.cards_played >= 50,
            Achievement::Adventurer => progress.player.level >= 5,
            Achievement::Conqueror => {
                levels_count > 0 && progress.unlocked_levels.len() >= levels_count as usize
            }
        }
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Achievement::FirstVictory => "First Victory",
            Achievement::CardCollector => "Card Collector",
            Achievement::DamageDealer => "Damage Dealer",
            Achievement::Healer => "Healer",
            Achievement::Rich => "Rich",
            Achievement::CardMaster => "Card Master",
            Achievement::Adventurer => "Adventurer",
            Achievement::Conqueror => "Conqueror",
        };
        f.write_str(name)
    }
}

/// Unlock every newly met achievement. Returns the new ones in order.
pub fn check_achievements(
    progress: &mut Progress,
    levels_count: u32,
    events: &mut Vec<BattleEvent>,
) -> Vec<Achievement> {
    let unlocked: Vec<_> = Achievement::ALL
        .into_iter()
        .filter(|&a| !progress.has_achievement(a) && a.is_met(progress, levels_count))
        .collect();

    for &achievement in &unlocked {
        info!(%achievement, "achievement unlocked");
        progress.achievements.push(achievement);
        events.push(BattleEvent::AchievementUnlocked { achievement });
    }
    unlocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::catalog::LevelId;
    use crate::core::BattleConfig;

    #[test]
    fn test_fresh_progress_has_none() {
        let mut progress = Progress::new(&BattleConfig::default());
        assert!(check_achievements(&mut progress, 4, &mut Vec::new()).is_empty());
    }

    #[test]
    fn test_unlocks_once() {
        let mut progress = Progress::new(&BattleConfig::default());
        progress.stats.battles_won = 1;
        progress.stats.damage_dealt = 120;
        let mut events = Vec::new();

        let unlocked = check_achievements(&mut progress, 4, &mut events);
        assert_eq!(unlocked, vec![Achievement::FirstVictory, Achievement::DamageDealer]);
        assert_eq!(events.len(), 2);

        // Already held: nothing new
        assert!(check_achievements(&mut progress, 4, &mut events).is_empty());
    }

    #[test]
    fn test_collector_counts_distinct_cards() {
        let mut progress = Progress::new(&BattleConfig::default());
        for _ in 0..10 {
            progress.add_card(CardId::new(1));
        }
        assert!(!Achievement::CardCollector.is_met(&progress, 4));

        for id in 2..=10 {
            progress.add_card(CardId::new(id));
        }
        assert!(Achievement::CardCollector.is_met(&progress, 4));
    }

    #[test]
    fn test_rich_counts_gold_earned_not_held() {
        let mut progress = Progress::new(&BattleConfig::default());
        progress.player.gold = 150;
        assert!(check_achievements(&mut progress, 4, &mut Vec::new()).is_empty());

        // Spending does not take it away
        progress.player.gold = 0;
        progress.stats.gold_earned = 100;
        assert_eq!(check_achievements(&mut progress, 4, &mut Vec::new()), vec![Achievement::Rich]);
    }

    #[test]
    fn test_conqueror() {
        let mut progress = Progress::new(&BattleConfig::default());
        assert!(!Achievement::Conqueror.is_met(&progress, 2));

        progress.unlock(LevelId::new(2));
        assert!(Achievement::Conqueror.is_met(&progress, 2));
    }
}
