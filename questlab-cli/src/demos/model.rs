use super::DemoContext;
use anyhow::Context;
use chrono::{TimeZone, Utc};
use questlab_model::{ActionOutcome, Character, Inventory, Item, ModelError, Quest, QuestLog, QuestProgress};
use questlab_types::{GameEvent, GameEventKind};
use std::io::Write;

fn narrate(ctx: &mut DemoContext<'_>, outcome: &ActionOutcome) -> anyhow::Result<()> {
    match outcome {
        ActionOutcome::Applied(events) => {
            for event in events {
                writeln!(ctx.out, "  {}", event.describe())?;
            }
        }
        ActionOutcome::Ignored(reason) => writeln!(ctx.out, "  (nothing happens: {reason})")?,
    }
    Ok(())
}

pub(super) fn characters(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut hero = Character::new("Aria", ctx.config.starting_health.max(1), 18);
    let mut goblin = Character::new("Goblin", 40, 6);
    writeln!(
        ctx.out,
        "{} has {} HP, the goblin {}",
        hero.name,
        hero.health().current(),
        goblin.health().current()
    )?;

    while goblin.is_alive() && hero.is_alive() {
        let outcome = hero.attack(&mut goblin);
        narrate(ctx, &outcome)?;
        let outcome = goblin.attack(&mut hero);
        narrate(ctx, &outcome)?;
    }

    writeln!(ctx.out, "Healing past the maximum is clamped:")?;
    let outcome = hero.heal(500);
    narrate(ctx, &outcome)?;

    writeln!(ctx.out, "Defeated characters cannot act:")?;
    let outcome = goblin.heal(10);
    narrate(ctx, &outcome)?;

    for event in hero.gain_xp(350) {
        writeln!(ctx.out, "  {}", event.describe())?;
    }
    writeln!(
        ctx.out,
        "{} is level {} with {} xp toward the next ({} needed)",
        hero.name,
        hero.level(),
        hero.xp(),
        Character::xp_to_next(hero.level())
    )?;
    Ok(())
}

pub(super) fn inventory(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let capacity = ctx.config.inventory_capacity.clamp(1, 4);
    let mut bag = Inventory::with_capacity(capacity);
    writeln!(ctx.out, "A bag with {capacity} slots")?;

    let loot = [
        Item::weapon("Iron Sword", 40, 8),
        Item::armor("Leather Cap", 15, 2),
        Item::potion("Healing Draught", 25, 30),
        Item::misc("Rope", 3),
        Item::misc("Lucky Coin", 1),
    ];
    for item in loot {
        match bag.add(item) {
            Ok(()) => writeln!(ctx.out, "  packed ({} free)", bag.free_slots())?,
            Err(ModelError::InventoryFull { item, .. }) => {
                writeln!(ctx.out, "  no room for {}, left it behind", item.name)?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    for item in bag.sorted_by_value() {
        writeln!(ctx.out, "  {item}")?;
    }
    writeln!(
        ctx.out,
        "Total value {}g, weight {:.1}",
        bag.total_value(),
        bag.total_weight()
    )?;

    let rope = bag.remove_by_name("Rope").context("rope should be packed")?;
    writeln!(ctx.out, "Used the {}; {} item(s) left", rope.name, bag.len())?;
    if let Err(e) = bag.remove_by_name("Dragon Egg") {
        writeln!(ctx.out, "Error: {e}")?;
    }
    Ok(())
}

pub(super) fn quests(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut log = QuestLog::new();
    let rats = log.accept(
        Quest::new("Rat Cellar", 3, 15).with_description("Clear the rats from the tavern cellar"),
    )?;
    let ring = log.accept(Quest::new("Lost Ring", 1, 50))?;

    for _ in 0..4 {
        match log.advance(rats, 1)? {
            QuestProgress::Advanced { progress, target } => {
                writeln!(ctx.out, "Rat Cellar: {progress}/{target}")?;
            }
            QuestProgress::Completed { reward } => {
                writeln!(ctx.out, "Rat Cellar done, +{reward} gold")?;
            }
            QuestProgress::Ignored(reason) => writeln!(ctx.out, "Ignored: {reason}")?,
        }
    }

    if log.abandon(ring)? {
        writeln!(ctx.out, "Gave up on the Lost Ring")?;
    }
    if let QuestProgress::Ignored(reason) = log.advance(ring, 1)? {
        writeln!(ctx.out, "Lost Ring: {reason}")?;
    }

    writeln!(ctx.out, "Gold earned: {}", log.gold_earned())?;
    writeln!(ctx.out, "Journal:")?;
    for event in log.journal() {
        writeln!(ctx.out, "  {}", event.describe())?;
    }
    Ok(())
}

pub(super) fn events(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let at = Utc
        .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .context("fixed timestamp")?;
    let events = [
        GameEventKind::ItemAdded {
            owner: "Aria".into(),
            item: "Iron Sword".into(),
        },
        GameEventKind::LevelUp {
            character: "Aria".into(),
            level: 2,
        },
        GameEventKind::QuestCompleted {
            title: "Rat Cellar".into(),
            reward: 15,
        },
    ]
    .map(|kind| GameEvent::at(kind, at));

    for event in &events {
        writeln!(ctx.out, "[{}] {}", event.name(), event.describe())?;
    }

    let json = events[2].to_json()?;
    writeln!(ctx.out, "As JSON: {json}")?;
    let back = GameEvent::from_json(&json)?;
    writeln!(ctx.out, "Read back: {}", back.describe())?;
    Ok(())
}
