//! Enemy decision tests against the starter catalog.

use card_battle::catalog::{Catalog, StaticCatalog};
use card_battle::combat::BattleContext;
use card_battle::core::{BattleConfig, BattleRng, Enemy, Player, Side};
use card_battle::effects::EffectKind;
use card_battle::enemy::{
    choose_action, execute_action, intent, BuffKind, EnemyAction, EnemyDef, EnemyId, SpecialAction,
};
use card_battle::zones::DeckZones;

const STARTER: &str = include_str!("../data/starter_catalog.json");

fn enemy(catalog: &StaticCatalog, id: u32) -> EnemyDef {
    catalog.enemy(EnemyId::new(id)).cloned().unwrap()
}

fn context_against(def: &EnemyDef, seed: u64) -> BattleContext {
    let config = BattleConfig::default();
    BattleContext::new(Player::new(&config), Enemy::from_def(def), DeckZones::default(), BattleRng::new(seed), config)
}

#[test]
fn test_goblin_pattern() {
    let catalog = StaticCatalog::from_json(STARTER).unwrap();
    let goblin = enemy(&catalog, 2);
    let mut ctx = context_against(&goblin, 1);

    ctx.state.turn_count = 2;
    let action = choose_action(&goblin, &mut ctx);
    assert_eq!(
        action,
        EnemyAction::Buff {
            buff: BuffKind::Strength,
            value: None,
            duration: None
        }
    );
    assert_eq!(intent(&goblin, 2), Some(action));

    execute_action(&mut ctx, &action, &mut Vec::new());
    assert_eq!(ctx.enemy.attack, 10);
    assert!(ctx.state.effects.has_from(Side::Enemy, EffectKind::Strength, Side::Enemy));

    // Turn 1 is the bleeding attack, using the buffed attack stat
    ctx.state.turn_count = 1;
    let action = choose_action(&goblin, &mut ctx);
    execute_action(&mut ctx, &action, &mut Vec::new());
    assert_eq!(ctx.player.vitals.health, 90);
    assert!(ctx.state.effects.has_from(Side::Player, EffectKind::Bleed, Side::Enemy));
}

#[test]
fn test_troll_heals_only_when_hurt() {
    let catalog = StaticCatalog::from_json(STARTER).unwrap();
    let troll = enemy(&catalog, 3);

    for seed in 0..20 {
        let mut ctx = context_against(&troll, seed);
        ctx.state.turn_count = 1;
        // Full health, early turn: only the plain attack passes
        assert_eq!(choose_action(&troll, &mut ctx), EnemyAction::Attack { value: None, rider: None });
    }

    let heals = (0..40)
        .filter(|&seed| {
            let mut ctx = context_against(&troll, seed);
            ctx.state.turn_count = 1;
            ctx.enemy.vitals.health = 20;
            choose_action(&troll, &mut ctx) == EnemyAction::Heal { value: Some(12) }
        })
        .count();
    // Uniform between attack and heal
    assert!(heals > 0 && heals < 40);
}

#[test]
fn test_troll_executes_weak_player() {
    let catalog = StaticCatalog::from_json(STARTER).unwrap();
    let troll = enemy(&catalog, 3);
    let mut ctx = context_against(&troll, 5);
    ctx.player.vitals.health = 25;

    let execute = EnemyAction::Special {
        special: SpecialAction::Execute { threshold: None },
    };
    let outcome = execute_action(&mut ctx, &execute, &mut Vec::new());

    assert_eq!(outcome, Some(card_battle::battle::Outcome::Defeat));
    assert_eq!(ctx.player.vitals.health, 0);
}

#[test]
fn test_random_conditions_follow_the_seed() {
    let catalog = StaticCatalog::from_json(STARTER).unwrap();
    let dragon = enemy(&catalog, 4);

    let picks = |seed| {
        let mut ctx = context_against(&dragon, seed);
        (1..=10)
            .map(|turn| {
                ctx.state.turn_count = turn;
                choose_action(&dragon, &mut ctx)
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(picks(77), picks(77));
    assert_eq!(intent(&dragon, 1), None);
}
