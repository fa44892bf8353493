//! Iterators: hand-written `Iterator` impls, `IntoIterator` for a custom
//! container, and adapter chains over game data.

use questlab_model::{Character, Inventory, Item};
use rand::Rng;
use rand::distributions::WeightedIndex;

/// Yields `(level, xp_needed_to_leave_it)` forever, starting at level 1.
///
/// Pair it with `take` or `take_while`; it never returns `None` on its own.
#[derive(Debug, Clone)]
pub struct XpCurve {
    level: u32,
}

impl XpCurve {
    #[must_use]
    pub fn new() -> Self {
        Self { level: 1 }
    }
}

impl Default for XpCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for XpCurve {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let level = self.level;
        self.level = self.level.checked_add(1)?;
        Some((level, Character::xp_to_next(level)))
    }
}

/// Total xp needed to reach `level` from level 1.
#[must_use]
pub fn xp_for_level(level: u32) -> u64 {
    XpCurve::new()
        .take_while(|&(l, _)| l < level)
        .map(|(_, xp)| u64::from(xp))
        .sum()
}

/// Counts down from `start` to 1, like a spell charging up.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    #[must_use]
    pub fn from(start: u32) -> Self {
        Self { remaining: start }
    }
}

impl Iterator for Countdown {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.remaining;
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Countdown {}

/// Weighted loot drops.
///
/// Draws are driven by the caller's RNG so a seeded `StdRng` replays the
/// same drops every run.
#[derive(Debug, Clone)]
pub struct LootTable {
    names: Vec<String>,
    weights: Option<WeightedIndex<u32>>,
}

impl LootTable {
    /// Builds a table from `(item name, weight)` pairs. Zero-weight entries
    /// never drop; a table whose weights are all zero drops nothing.
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = (S, u32)>) -> Self {
        let (names, raw): (Vec<String>, Vec<u32>) =
            entries.into_iter().map(|(n, w)| (n.into(), w)).unzip();
        let weights = WeightedIndex::new(&raw).ok();
        Self { names, weights }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Draws one item name.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        let dist = self.weights.as_ref()?;
        Some(self.names[rng.sample(dist)].as_str())
    }

    /// Lazily draws `count` item names.
    pub fn drops<'a, R: Rng>(
        &'a self,
        rng: &'a mut R,
        count: usize,
    ) -> impl Iterator<Item = &'a str> + 'a {
        (0..count).filter_map(move |_| self.roll(rng))
    }
}

/// A group of adventurers that can be iterated by value or by reference.
#[derive(Debug, Clone, Default)]
pub struct Party {
    members: Vec<Character>,
}

impl Party {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&mut self, member: Character) {
        self.members.push(member);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Character> {
        self.members.iter_mut()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Character> {
        self.members.iter().filter(|c| c.is_alive())
    }

    #[must_use]
    pub fn total_health(&self) -> u32 {
        self.members.iter().map(|c| c.health().current()).sum()
    }

    /// The strongest living member, if any.
    #[must_use]
    pub fn strongest(&self) -> Option<&Character> {
        self.alive().max_by_key(|c| c.attack_power)
    }
}

impl FromIterator<Character> for Party {
    fn from_iter<I: IntoIterator<Item = Character>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Party {
    type Item = Character;
    type IntoIter = std::vec::IntoIter<Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a Party {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Numbered lines for an inventory listing: `"1. Iron Sword (weapon, 40g)"`.
#[must_use]
pub fn inventory_report(inventory: &Inventory) -> Vec<String> {
    inventory
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect()
}

/// Names of items worth at least `min_value`, most valuable first.
#[must_use]
pub fn valuables(inventory: &Inventory, min_value: u32) -> Vec<&str> {
    inventory
        .sorted_by_value()
        .into_iter()
        .take_while(|item| item.value >= min_value)
        .map(|item| item.name.as_str())
        .collect()
}

/// Pairs heroes with opponents until either side runs out.
#[must_use]
pub fn matchups<'a>(heroes: &'a [&'a str], monsters: &'a [&'a str]) -> Vec<(&'a str, &'a str)> {
    heroes.iter().copied().zip(monsters.iter().copied()).collect()
}

/// Running total of damage after each hit.
#[must_use]
pub fn running_damage(hits: &[u32]) -> Vec<u32> {
    hits.iter()
        .scan(0u32, |total, &hit| {
            *total = total.saturating_add(hit);
            Some(*total)
        })
        .collect()
}

/// Sum of every `window` consecutive hits, e.g. to spot combo bursts.
/// Empty when `window` is zero or longer than `hits`.
#[must_use]
pub fn burst_damage(hits: &[u32], window: usize) -> Vec<u32> {
    if window == 0 {
        return Vec::new();
    }
    hits.windows(window).map(|w| w.iter().sum()).collect()
}

/// Splits items into pages of `page_size` names. A page size of zero is
/// treated as one.
#[must_use]
pub fn paginate(items: &[Item], page_size: usize) -> Vec<Vec<&str>> {
    items
        .chunks(page_size.max(1))
        .map(|page| page.iter().map(|i| i.name.as_str()).collect())
        .collect()
}
