use questlab_basics::iterators::{
    Countdown, LootTable, Party, XpCurve, burst_damage, inventory_report, matchups, paginate,
    running_damage, valuables, xp_for_level,
};
use questlab_model::{Character, Inventory, Item};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn xp_curve_first_levels() {
    let first: Vec<(u32, u32)> = XpCurve::new().take(3).collect();
    assert_eq!(first, vec![(1, 100), (2, 200), (3, 300)]);
}

#[test]
fn xp_for_level_sums_the_curve() {
    assert_eq!(xp_for_level(1), 0);
    assert_eq!(xp_for_level(4), 600);
}

#[test]
fn countdown_is_exact_size() {
    let c = Countdown::from(3);
    assert_eq!(c.len(), 3);
    assert_eq!(c.collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(Countdown::from(0).next(), None);
}

#[test]
fn seeded_loot_is_reproducible() {
    let table = LootTable::new([("Gold Coin", 70), ("Potion", 25), ("Dragon Scale", 5)]);
    let mut a = StdRng::seed_from_u64(7);
    let mut b = StdRng::seed_from_u64(7);
    let first: Vec<&str> = table.drops(&mut a, 20).collect();
    let second: Vec<&str> = table.drops(&mut b, 20).collect();
    assert_eq!(first.len(), 20);
    assert_eq!(first, second);
}

#[test]
fn zero_weight_entries_never_drop() {
    let table = LootTable::new([("Common", 1), ("Never", 0)]);
    let mut rng = StdRng::seed_from_u64(1);
    assert!(table.drops(&mut rng, 100).all(|name| name == "Common"));
}

#[test]
fn empty_or_all_zero_table_drops_nothing() {
    let mut rng = StdRng::seed_from_u64(1);
    let empty = LootTable::new(Vec::<(&str, u32)>::new());
    assert!(empty.is_empty());
    assert_eq!(empty.roll(&mut rng), None);
    let zero = LootTable::new([("Nothing", 0)]);
    assert_eq!(zero.drops(&mut rng, 5).count(), 0);
}

#[test]
fn party_iterates_by_ref_and_value() {
    let mut party: Party = [
        Character::new("Aria", 100, 12),
        Character::new("Borin", 140, 9),
        Character::new("Cyra", 70, 18),
    ]
    .into_iter()
    .collect();

    party.iter_mut().nth(1).unwrap().take_damage(200);

    let alive: Vec<&str> = party.alive().map(|c| c.name.as_str()).collect();
    assert_eq!(alive, vec!["Aria", "Cyra"]);
    assert_eq!(party.total_health(), 170);
    assert_eq!(party.strongest().unwrap().name, "Cyra");

    let mut count = 0;
    for _member in &party {
        count += 1;
    }
    assert_eq!(count, 3);

    let names: Vec<String> = party.into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Aria", "Borin", "Cyra"]);
}

#[test]
fn report_and_valuables() {
    let mut inv = Inventory::with_capacity(5);
    inv.add(Item::misc("Torch", 1)).unwrap();
    inv.add(Item::weapon("Iron Sword", 40, 8)).unwrap();
    inv.add(Item::armor("Leather Vest", 25, 3)).unwrap();

    let report = inventory_report(&inv);
    assert_eq!(report[0], "1. Torch (misc, 1g)");
    assert_eq!(report.len(), 3);
    assert_eq!(valuables(&inv, 20), vec!["Iron Sword", "Leather Vest"]);
}

#[test]
fn adapters() {
    assert_eq!(
        matchups(&["Aria", "Borin", "Cyra"], &["Goblin", "Orc"]),
        vec![("Aria", "Goblin"), ("Borin", "Orc")]
    );
    assert_eq!(running_damage(&[5, 10, 3]), vec![5, 15, 18]);
    assert_eq!(burst_damage(&[5, 10, 3, 7], 2), vec![15, 13, 10]);
    assert!(burst_damage(&[5], 2).is_empty());
    assert!(burst_damage(&[5], 0).is_empty());
}

#[test]
fn paginate_chunks() {
    let items: Vec<Item> = (1..=5).map(|n| Item::misc(format!("gem-{n}"), n)).collect();
    let pages = paginate(&items, 2);
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[2], vec!["gem-5"]);
    assert_eq!(paginate(&items, 0).len(), 5);
}
