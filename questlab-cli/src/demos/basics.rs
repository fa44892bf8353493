use super::DemoContext;
use anyhow::Context;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use questlab_basics::collections::{
    EventSchedule, Leaderboard, TurnQueue, group_by_kind, shared_items, top_words,
    unique_sorted,
};
use questlab_basics::datetime::{
    Deadline, days_between, format_duration, format_timestamp, next_daily_reset,
    parse_timestamp, xp_multiplier,
};
use questlab_basics::errors::{checked_divide, load_or_default, parse_command, parse_health, split_loot};
use questlab_basics::filesystem::{GameLog, SAVE_EXTENSION, backup, list_save_files, slot_path, write_atomic};
use questlab_basics::iterators::{
    Countdown, LootTable, Party, XpCurve, burst_damage, inventory_report, paginate,
    running_damage, valuables,
};
use questlab_basics::{GameState, SaveData, SaveFormat};
use questlab_model::{Character, Inventory, Item, Quest};
use questlab_types::{GameEvent, GameEventKind};
use std::io::Write;

fn starter_inventory(capacity: usize) -> anyhow::Result<Inventory> {
    let mut inventory = Inventory::with_capacity(capacity.max(5));
    for item in [
        Item::weapon("Iron Sword", 40, 8),
        Item::armor("Chain Mail", 60, 5).with_weight(8.0),
        Item::potion("Healing Draught", 25, 30),
        Item::misc("Rope", 3),
        Item::misc("Ruby", 75).with_weight(0.1),
    ] {
        inventory.add(item)?;
    }
    Ok(inventory)
}

pub(super) fn errors(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    for line in ["attack cave troll", "heal 20", "heal lots", "dance", "take", ""] {
        match parse_command(line) {
            Ok(command) => writeln!(ctx.out, "{line:?} -> {command:?}")?,
            Err(e) => writeln!(ctx.out, "{line:?} -> error: {e}")?,
        }
    }

    let max = ctx.config.starting_health.max(1);
    for input in ["80", "0", "abc"] {
        match parse_health(input, max) {
            Ok(health) => writeln!(ctx.out, "health {input:?} accepted: {health}")?,
            Err(e) => writeln!(ctx.out, "health {input:?} rejected: {e}")?,
        }
    }

    let (share, leftover) = split_loot(100, 3)?;
    writeln!(ctx.out, "100 gold over 3 heroes: {share} each, {leftover} left over")?;
    if let Err(e) = checked_divide(100, 0) {
        writeln!(ctx.out, "100 / 0: {e}")?;
    }

    let missing = ctx.config.save_dir.join("no-such-save.json");
    let data: SaveData = load_or_default(&missing);
    writeln!(ctx.out, "Missing save loads as defaults: {} entries", data.len())?;
    Ok(())
}

pub(super) fn iterators(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let curve: Vec<String> = XpCurve::new()
        .take(5)
        .map(|(level, xp)| format!("L{level}:{xp}"))
        .collect();
    writeln!(ctx.out, "XP curve: {}", curve.join(", "))?;

    let countdown: Vec<String> = Countdown::from(3).map(|n| n.to_string()).collect();
    writeln!(ctx.out, "Casting in {}... fire!", countdown.join("... "))?;

    let table = LootTable::new([("Copper Coin", 60), ("Potion", 30), ("Dragon Scale", 10)]);
    let mut rng = ctx.rng();
    let drops: Vec<&str> = table.drops(&mut rng, 5).collect();
    writeln!(ctx.out, "Loot: {}", drops.join(", "))?;

    let mut party = Party::new();
    party.join(Character::new("Aria", 100, 18));
    party.join(Character::new("Borin", 140, 12));
    let mut cyra = Character::new("Cyra", 70, 22);
    cyra.take_damage(70);
    party.join(cyra);
    let alive: Vec<&str> = party.alive().map(|c| c.name.as_str()).collect();
    writeln!(
        ctx.out,
        "Standing: {} (total {} HP)",
        alive.join(", "),
        party.total_health()
    )?;
    if let Some(strongest) = party.strongest() {
        writeln!(ctx.out, "Hardest hitter: {}", strongest.name)?;
    }
    for member in &party {
        writeln!(ctx.out, "  {} lvl {}", member.name, member.level())?;
    }

    let inventory = starter_inventory(ctx.config.inventory_capacity)?;
    for line in inventory_report(&inventory) {
        writeln!(ctx.out, "  {line}")?;
    }
    writeln!(ctx.out, "Worth 40g or more: {}", valuables(&inventory, 40).join(", "))?;
    let items: Vec<Item> = inventory.iter().cloned().collect();
    for (n, page) in paginate(&items, 2).iter().enumerate() {
        writeln!(ctx.out, "  page {}: {}", n + 1, page.join(", "))?;
    }

    let hits = [12, 7, 30, 4, 18];
    writeln!(ctx.out, "Running damage: {:?}", running_damage(&hits))?;
    writeln!(ctx.out, "Best 2-hit burst: {:?}", burst_damage(&hits, 2).into_iter().max())?;
    Ok(())
}

pub(super) fn collections(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let tale = "the goblin hit the hero and the hero hit the goblin back";
    writeln!(ctx.out, "Top words: {:?}", top_words(tale, 3))?;
    writeln!(
        ctx.out,
        "Unique guests: {:?}",
        unique_sorted(&["Cyra", "Aria", "Borin", "Aria"])
    )?;

    let mine = starter_inventory(ctx.config.inventory_capacity)?;
    let mut theirs = Inventory::with_capacity(3);
    theirs.add(Item::misc("Rope", 3))?;
    theirs.add(Item::misc("Ruby", 80))?;
    writeln!(ctx.out, "Both carry: {:?}", shared_items(&mine, &theirs))?;
    for (kind, names) in group_by_kind(&mine) {
        writeln!(ctx.out, "  {kind}: {}", names.join(", "))?;
    }

    let mut board = Leaderboard::new();
    for (player, score) in [("Aria", 120), ("Borin", 90), ("Aria", 80), ("Cyra", 150)] {
        board.record(player, score);
    }
    writeln!(ctx.out, "Leaderboard: {:?}", board.top(3))?;

    let mut turns = TurnQueue::new(["Aria", "Borin", "Goblin"]);
    turns.cut_in("Cyra");
    let order: Vec<String> = std::iter::from_fn(|| turns.next_turn()).take(4).collect();
    writeln!(ctx.out, "Turn order: {}", order.join(" -> "))?;

    let mut schedule = EventSchedule::new();
    schedule.schedule(5, "Merchant arrives");
    schedule.schedule(2, "Torch burns out");
    schedule.schedule(5, "Rain starts");
    for tick in [3, 6] {
        writeln!(ctx.out, "Tick {tick}: {:?}", schedule.pop_due(tick))?;
    }
    Ok(())
}

pub(super) fn datetime(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let now = Utc
        .with_ymd_and_hms(2024, 3, 1, 22, 30, 0)
        .single()
        .context("fixed timestamp")?;
    writeln!(ctx.out, "Now: {}", format_timestamp(now))?;

    let deadline = Deadline::in_hours("Rat Cellar", now, 26);
    writeln!(ctx.out, "{}", deadline.describe(now))?;
    writeln!(ctx.out, "{}", deadline.describe(now + Duration::days(2)))?;

    let reset = next_daily_reset(now, 4);
    writeln!(
        ctx.out,
        "Daily reset at {} (in {})",
        format_timestamp(reset),
        format_duration(reset - now)
    )?;

    match parse_timestamp("2024-03-02 09:15") {
        Ok(at) => writeln!(ctx.out, "Parsed: {}", format_timestamp(at))?,
        Err(e) => writeln!(ctx.out, "Parse failed: {e}")?,
    }
    if let Err(e) = parse_timestamp("tomorrow-ish") {
        writeln!(ctx.out, "Parse failed: {e}")?;
    }

    let festival = NaiveDate::from_ymd_opt(2024, 3, 9).context("fixed date")?;
    writeln!(
        ctx.out,
        "Festival in {} days, xp x{}",
        days_between(now.date_naive(), festival),
        xp_multiplier(festival)
    )?;
    Ok(())
}

pub(super) fn filesystem(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let dir = ctx.config.save_dir.clone();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create save directory {}", dir.display()))?;

    let log = GameLog::open(ctx.config.log_path())?;
    log.append("Session started")?;
    log.append_event(&GameEvent::now(GameEventKind::QuestAccepted {
        title: "Rat Cellar".into(),
    }))?;
    writeln!(ctx.out, "Last log lines in {}:", log.path().display())?;
    for line in log.tail(2)? {
        writeln!(ctx.out, "  {}", GameLog::message_of(&line))?;
    }

    for slot in 1..=2 {
        let path = slot_path(&dir, slot);
        write_atomic(&path, format!("slot = {slot}\n").as_bytes())?;
    }
    let first = slot_path(&dir, 1);
    if let Some(copy) = backup(&first)? {
        writeln!(ctx.out, "Backed up slot 1 to {}", file_name(&copy))?;
    }
    let saves = list_save_files(&dir, SAVE_EXTENSION)?;
    let names: Vec<String> = saves.iter().map(|p| file_name(p)).collect();
    writeln!(ctx.out, "Save files: {}", names.join(", "))?;
    Ok(())
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub(super) fn save(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut data = SaveData::new();
    data.set("hero.name", "Aria the Bold");
    data.set("hero.level", 3i64);
    data.set("hero.gold", 1250.5f64);
    data.set("hardcore", false);

    let text = data.encode(SaveFormat::KeyValue)?;
    writeln!(ctx.out, "Key/value save:\n{}", text.trim_end())?;
    let json = data.encode(SaveFormat::Json)?;
    writeln!(ctx.out, "JSON save: {json}")?;
    let back = SaveData::decode(&text, SaveFormat::KeyValue)?;
    writeln!(ctx.out, "Round trip intact: {}", back == data)?;

    if let Err(e) = SaveData::decode("hero.name \"Aria\"", SaveFormat::KeyValue) {
        writeln!(ctx.out, "Corrupt save: {e}")?;
    }

    std::fs::create_dir_all(&ctx.config.save_dir)?;
    let hero = Character::new("Aria", ctx.config.starting_health.max(1), 18);
    let mut state = GameState::new(hero, ctx.config.inventory_capacity);
    state.inventory.add(Item::weapon("Iron Sword", 40, 8))?;
    state.quests.accept(Quest::new("Rat Cellar", 3, 15))?;
    state.gold = 120;
    let path = ctx.config.save_dir.join("game.json");
    state.save(&path)?;
    let loaded = GameState::load(&path)?;
    writeln!(ctx.out, "Full game saved to {}", file_name(&path))?;
    for (key, value) in loaded.summary().iter() {
        writeln!(ctx.out, "  {key} = {value}")?;
    }
    Ok(())
}
