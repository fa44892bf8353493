use super::DemoContext;
use anyhow::Context;
use questlab_model::{Character, Item};
use questlab_patterns::decorator::{
    Cursed, Enchanted, Equipment, Sword, cached, logged, requires_alive, timed,
};
use questlab_patterns::delegation::{Companion, Pet};
use questlab_patterns::factory::{EnemyFactory, EnemyKind, EnemyRegistry};
use questlab_patterns::inheritance::strike;
use questlab_patterns::observer::{AchievementTracker, EventBus, narrate};
use questlab_patterns::operators::{Bag, Dice, Vector2, Wallet};
use questlab_patterns::polymorphism::{Archer, Hero, Mage, Warrior, battle_round, roll_call, threat_level};
use questlab_patterns::shapes::{Circle, Rectangle, Shape, Triangle, largest, total_area};
use questlab_patterns::singleton::{Difficulty, GameSettings, same_instance};
use questlab_patterns::strategy::{Aggressive, Fighter, duel, loot_order, sort_loot};
use questlab_patterns::{Boss, Creature, Monster, Player};
use questlab_types::{GameEvent, GameEventKind};
use std::io::Write;

pub(super) fn inheritance(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut hero = Player::new("Aria", ctx.config.starting_health.max(1), 20);
    let mut wolf = Monster::new("Grey Wolf", "wolf", 30, 7).with_loot("Wolf Pelt");
    let mut boss = Boss::new(
        Monster::new("Gorath", "ogre", 120, 15).with_loot("Ogre Club"),
        5,
    );

    let lineup: [&dyn Creature; 3] = [&hero, &wolf, &boss];
    for creature in lineup {
        writeln!(ctx.out, "{}", creature.describe())?;
    }

    while wolf.is_alive() {
        let lost = strike(&hero, &mut wolf);
        writeln!(ctx.out, "Aria hits the wolf for {lost}")?;
    }
    writeln!(ctx.out, "The wolf drops {:?}", wolf.drop_loot())?;

    let lost = strike(&hero, &mut boss);
    writeln!(ctx.out, "Armor soaks part of the blow: Gorath loses {lost}")?;
    while !boss.is_enraged() && boss.is_alive() {
        strike(&hero, &mut boss);
    }
    writeln!(ctx.out, "{}", boss.describe())?;
    let lost = strike(&boss, &mut hero);
    writeln!(ctx.out, "An enraged hit costs Aria {lost} HP")?;
    let healed = hero.drink_potion(25);
    writeln!(ctx.out, "A potion restores {healed}: {}", hero.describe())?;
    Ok(())
}

pub(super) fn polymorphism(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut heroes: Vec<Box<dyn Hero>> = vec![
        Box::new(Warrior::new("Borin")),
        Box::new(Mage::new("Cyra")),
        Box::new(Archer::new("Ela", 4)),
    ];
    for hero in &heroes {
        writeln!(ctx.out, "{} the {}", hero.name(), hero.class())?;
    }

    let mut dragon = Monster::new("Ignis", "dragon", 200, 25);
    for round in 1..=3 {
        writeln!(ctx.out, "Round {round}:")?;
        for line in battle_round(&mut heroes, &mut dragon) {
            writeln!(ctx.out, "  {line}")?;
        }
        if !dragon.is_alive() {
            break;
        }
    }

    let crowd: Vec<Box<dyn Creature>> = vec![
        Box::new(Player::new("Aria", 100, 18)),
        Box::new(Monster::new("Rat", "rat", 5, 1)),
        Box::new(dragon),
    ];
    for line in roll_call(&crowd) {
        writeln!(ctx.out, "  {line}")?;
    }
    writeln!(ctx.out, "Threat level: {}", threat_level(&crowd))?;
    Ok(())
}

pub(super) fn shapes(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(1.5)?),
        Box::new(Rectangle::new(2.0, 3.0)?),
        Box::new(Rectangle::square(2.5)?),
        Box::new(Triangle::new(3.0, 4.0, 5.0)?),
    ];
    for shape in &shapes {
        writeln!(ctx.out, "{}", shape.describe())?;
    }
    writeln!(ctx.out, "Total area: {:.2}", total_area(&shapes))?;
    if let Some(big) = largest(&shapes) {
        writeln!(ctx.out, "Largest: {}", big.name())?;
    }

    for rejected in [Circle::new(-1.0).map(|_| ()), Triangle::new(1.0, 2.0, 3.0).map(|_| ())] {
        if let Err(e) = rejected {
            writeln!(ctx.out, "Rejected: {e}")?;
        }
    }
    Ok(())
}

pub(super) fn operators(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let position = Vector2::new(1.0, 2.0);
    let velocity = Vector2::new(0.5, -1.0);
    let mut next = position + velocity * 2.0;
    writeln!(ctx.out, "{position} + {velocity} * 2 = {next}")?;
    next += -velocity;
    writeln!(
        ctx.out,
        "Stepped back to {next}, {:.2} from the start",
        next.distance(position)
    )?;

    let mut bag: Bag<&str> = ["Rope", "Torch"].into_iter().collect();
    bag.put("Ruby");
    bag.extend(["Map"]);
    writeln!(ctx.out, "Bag holds {} items, first {:?}", bag.len(), bag[0])?;
    writeln!(ctx.out, "Has a torch: {}", bag.contains(&"Torch"))?;

    let mut rng = ctx.rng();
    for notation in ["2d6", "d20", "0d6", "fireball"] {
        match notation.parse::<Dice>() {
            Ok(dice) => writeln!(
                ctx.out,
                "{dice} rolls {} (range {}-{})",
                dice.roll(&mut rng),
                dice.min(),
                dice.max()
            )?,
            Err(e) => writeln!(ctx.out, "{notation:?}: {e}")?,
        }
    }

    let mut wallet = Wallet::new(50);
    {
        let mut tx = wallet.begin();
        tx.spend(30)?;
        tx.earn(5);
        if let Err(e) = tx.spend(100) {
            writeln!(ctx.out, "Shopping failed: {e}")?;
        }
        // Dropped without commit: rolled back.
    }
    writeln!(ctx.out, "After an abandoned purchase: {} gold", wallet.gold)?;
    let mut tx = wallet.begin();
    tx.spend(20)?;
    tx.commit();
    writeln!(ctx.out, "After a committed purchase: {} gold", wallet.gold)?;
    Ok(())
}

pub(super) fn singleton(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let settings = GameSettings::global();
    settings.replace(ctx.config.settings.clone());
    writeln!(
        ctx.out,
        "Global settings: {} difficulty, volume {}",
        settings.difficulty(),
        settings.volume()
    )?;
    writeln!(
        ctx.out,
        "Same instance everywhere: {}",
        same_instance(settings, GameSettings::global())
    )?;

    // The plain value needs no global at all.
    let mut local = settings.snapshot();
    local.difficulty = Difficulty::Hard;
    writeln!(
        ctx.out,
        "A local copy on {}: an 80 HP orc gets {} HP; the global is still {}",
        local.difficulty,
        local.scaled_enemy_health(80),
        settings.difficulty()
    )?;
    Ok(())
}

pub(super) fn factory(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut factory = EnemyFactory::new(ctx.config.settings.clone());
    for kind in EnemyKind::ALL {
        let enemy = factory.create(kind);
        writeln!(ctx.out, "{kind}: {}", enemy.describe())?;
    }
    let wave = factory.wave(EnemyKind::Goblin, 3);
    let names: Vec<&str> = wave.iter().map(|e| e.name()).collect();
    writeln!(ctx.out, "A wave: {}", names.join(", "))?;
    writeln!(ctx.out, "Spawned so far: {}", factory.spawned())?;

    let mut registry = EnemyRegistry::with_builtins();
    registry.register("slime", || -> Box<dyn Creature> {
        Box::new(Monster::new("Slime", "slime", 12, 2).with_loot("Goo"))
    });
    writeln!(ctx.out, "Known enemies: {}", registry.names().join(", "))?;
    for name in ["Slime", "orcc"] {
        match registry.create(name) {
            Ok(enemy) => writeln!(ctx.out, "{name} -> {}", enemy.describe())?,
            Err(e) => writeln!(ctx.out, "{name} -> {e}")?,
        }
    }
    Ok(())
}

pub(super) fn observer(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut bus = EventBus::new();
    let (achievements, _) = AchievementTracker::attach(&mut bus);
    let (story, story_id) = narrate(&mut bus);
    let (_, inbox) = bus.subscribe_channel();

    let events = [
        GameEventKind::Died {
            target: "Goblin".into(),
        },
        GameEventKind::QuestCompleted {
            title: "Rat Cellar".into(),
            reward: 15,
        },
        GameEventKind::LevelUp {
            character: "Aria".into(),
            level: 5,
        },
    ];
    for kind in events {
        let delivered = bus.publish(&GameEvent::now(kind));
        writeln!(ctx.out, "Published to {delivered} subscriber(s)")?;
    }

    for line in story.borrow().iter() {
        writeln!(ctx.out, "  Narrator: {line}")?;
    }
    writeln!(ctx.out, "Achievements: {}", achievements.borrow().unlocked().join(", "))?;
    writeln!(ctx.out, "Mailbox holds {} event(s)", inbox.try_iter().count())?;

    bus.unsubscribe(story_id);
    writeln!(ctx.out, "Narrator left; {} subscriber(s) remain", bus.subscriber_count())?;
    Ok(())
}

pub(super) fn strategy(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut knight = Fighter::new("Knight", 120, 14);
    let mut berserker = Fighter::new("Berserker", 100, 16);
    berserker.set_strategy(Box::new(Aggressive));
    writeln!(
        ctx.out,
        "{} fights {}, {} fights {}",
        knight.name,
        knight.strategy_name(),
        berserker.name,
        berserker.strategy_name()
    )?;
    match duel(&mut knight, &mut berserker, 50) {
        Some(winner) => writeln!(ctx.out, "{winner} wins")?,
        None => writeln!(ctx.out, "Both are still standing")?,
    }

    let mut loot = vec![
        Item::misc("Gold Idol", 300).with_weight(6.0),
        Item::misc("Ruby", 75).with_weight(0.1),
        Item::weapon("Iron Sword", 40, 8).with_weight(3.0),
    ];
    for name in ["value", "weight", "value_per_weight"] {
        let order = loot_order(name).with_context(|| format!("no loot order {name:?}"))?;
        sort_loot(&mut loot, order);
        let names: Vec<&str> = loot.iter().map(|i| i.name.as_str()).collect();
        writeln!(ctx.out, "By {name}: {}", names.join(", "))?;
    }
    Ok(())
}

pub(super) fn decorator(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let double = logged("double_damage", |d: u32| d * 2);
    writeln!(ctx.out, "Doubled: {}", double(21))?;

    let (sum, elapsed) = timed("sum_xp", |n: u64| (1..=n).sum::<u64>())(10_000);
    writeln!(ctx.out, "Summed xp to {sum} in {}us", elapsed.as_micros())?;

    let mut xp_needed = cached(|level: &u32| Character::xp_to_next(*level));
    for level in [3, 4, 3, 3] {
        xp_needed.call(level);
    }
    writeln!(
        ctx.out,
        "Cache: {} hits, {} misses",
        xp_needed.hits(),
        xp_needed.misses()
    )?;

    let heal = requires_alive(|c: &mut Character| c.heal(10).is_applied());
    let mut ghost = Character::new("Ghost", 10, 1);
    ghost.take_damage(10);
    if let Err(e) = heal(&mut ghost) {
        writeln!(ctx.out, "Blocked: {e}")?;
    }

    let sword = Sword::new("Longsword", 10, 50);
    let flaming = Enchanted::new(sword, "Fire", 4);
    writeln!(ctx.out, "{}", flaming.describe())?;
    let cursed = Cursed::new(flaming);
    writeln!(ctx.out, "{}", cursed.describe())?;
    let lifted = cursed.lift();
    writeln!(ctx.out, "Curse lifted: {}", lifted.describe())?;
    Ok(())
}

pub(super) fn delegation(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut pet = Pet::new(Companion::new("Biscuit", "fox"));
    pet.treat(10);
    pet.learn("roll over");
    pet.learn("fetch");
    pet.learn("fetch");
    writeln!(ctx.out, "{}", pet.describe())?;
    for trick in ["fetch", "juggle"] {
        match pet.perform(trick) {
            Some(line) => writeln!(ctx.out, "{line}")?,
            None => writeln!(ctx.out, "{} looks puzzled at {trick:?}", pet.name())?,
        }
    }
    pet.rename("Sir Biscuit");
    let companion = pet.into_companion();
    writeln!(ctx.out, "Back to a plain companion: {}", companion.describe())?;
    Ok(())
}
