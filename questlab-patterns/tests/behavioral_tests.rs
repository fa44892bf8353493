use pretty_assertions::assert_eq;
use questlab_model::{Item, ItemKind};
use questlab_patterns::observer::{AchievementTracker, EventBus, narrate};
use questlab_patterns::strategy::{
    Aggressive, Balanced, Defensive, Fighter, duel, loot_order, sort_loot,
};
use questlab_types::{GameEvent, GameEventKind};
use std::cell::Cell;
use std::rc::Rc;

fn died(target: &str) -> GameEvent {
    GameEvent::now(GameEventKind::Died {
        target: target.into(),
    })
}

fn quest_done(title: &str) -> GameEvent {
    GameEvent::now(GameEventKind::QuestCompleted {
        title: title.into(),
        reward: 10,
    })
}

// ── Observer ─────────────────────────────────────────────────────

#[test]
fn callbacks_receive_published_events() {
    let mut bus = EventBus::new();
    let seen = Rc::new(Cell::new(0));
    let counter = Rc::clone(&seen);
    let id = bus.subscribe(move |_| counter.set(counter.get() + 1));

    assert_eq!(bus.publish(&died("Snik")), 1);
    assert_eq!(bus.publish(&died("Grum")), 1);
    assert_eq!(seen.get(), 2);

    assert!(bus.unsubscribe(id));
    assert!(!bus.unsubscribe(id));
    assert_eq!(bus.publish(&died("Blob")), 0);
    assert_eq!(seen.get(), 2);
    assert_eq!(bus.published(), 3);
}

#[test]
fn channel_subscribers_drain_at_their_own_pace() {
    let mut bus = EventBus::new();
    let (_, rx) = bus.subscribe_channel();
    bus.publish(&died("Snik"));
    bus.publish(&quest_done("Rat Cellar"));

    let names: Vec<&'static str> = rx.try_iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["died", "quest_completed"]);
}

#[test]
fn closed_channels_are_dropped() {
    let mut bus = EventBus::new();
    let (_, rx) = bus.subscribe_channel();
    drop(rx);
    assert_eq!(bus.publish(&died("Snik")), 0);
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn achievements_unlock_once() {
    let mut bus = EventBus::new();
    let (tracker, _) = AchievementTracker::attach(&mut bus);

    bus.publish(&died("Snik"));
    bus.publish(&died("Grum"));
    for title in ["A", "B", "C", "D"] {
        bus.publish(&quest_done(title));
    }
    for level in 5..=6 {
        bus.publish(&GameEvent::now(GameEventKind::LevelUp {
            character: "Aria".into(),
            level,
        }));
    }

    let tracker = tracker.borrow();
    assert_eq!(
        tracker.unlocked(),
        [
            AchievementTracker::FIRST_BLOOD,
            AchievementTracker::QUEST_MASTER,
            AchievementTracker::SEASONED,
        ]
    );
    assert_eq!(tracker.kills(), 2);
    assert!(!tracker.has(AchievementTracker::MONSTER_HUNTER));
}

#[test]
fn narration_observer_describes_events() {
    let mut bus = EventBus::new();
    let (lines, _) = narrate(&mut bus);
    bus.publish(&quest_done("Rat Cellar"));
    assert_eq!(
        lines.borrow().as_slice(),
        ["Quest 'Rat Cellar' completed, reward: 10 gold"]
    );
}

// ── Strategy ─────────────────────────────────────────────────────

#[test]
fn strategies_shape_damage() {
    let mut attacker = Fighter::new("A", 100, 20);
    let mut target = Fighter::new("B", 100, 20);

    assert_eq!(attacker.strike(&mut target), 20);

    attacker.set_strategy(Box::new(Aggressive));
    assert_eq!(attacker.strike(&mut target), 30);

    target.set_strategy(Box::new(Defensive));
    assert_eq!(attacker.strike(&mut target), 15);

    attacker.set_strategy(Box::new(Balanced));
    target.set_strategy(Box::new(Aggressive));
    assert_eq!(attacker.strike(&mut target), 25);
    assert_eq!(target.health().current(), 100 - 20 - 30 - 15 - 25);
}

#[test]
fn fighters_adapt_when_hurt() {
    let mut hurt = Fighter::new("A", 100, 20);
    let mut fresh = Fighter::new("B", 100, 80);
    fresh.strike(&mut hurt);
    assert_eq!(hurt.strategy_name(), "balanced");
    hurt.adapt(&fresh);
    assert_eq!(hurt.strategy_name(), "defensive");
    fresh.adapt(&hurt);
    assert_eq!(fresh.strategy_name(), "aggressive");
}

#[test]
fn stronger_fighter_wins_the_duel() {
    let mut a = Fighter::new("A", 100, 30);
    let mut b = Fighter::new("B", 100, 10);
    assert_eq!(duel(&mut a, &mut b, 20).as_deref(), Some("A"));
    assert!(!b.is_alive());
}

#[test]
fn loot_orders_are_closures() {
    let mut loot = vec![
        Item::misc("Rope", 2).with_weight(2.0),
        Item::weapon("Sword", 40, 8).with_weight(4.0),
        Item::new("Ruby", ItemKind::Misc, 30).with_weight(0.1),
    ];

    sort_loot(&mut loot, loot_order("value").unwrap());
    let names: Vec<&str> = loot.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Sword", "Ruby", "Rope"]);

    sort_loot(&mut loot, loot_order("value_per_weight").unwrap());
    assert_eq!(loot[0].name, "Ruby");

    sort_loot(&mut loot, |a, b| a.name.len().cmp(&b.name.len()));
    let names: Vec<&str> = loot.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Ruby", "Rope", "Sword"]);

    assert!(loot_order("colour").is_none());
}
