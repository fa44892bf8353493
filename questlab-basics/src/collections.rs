//! Collections: which std container fits which job.

use questlab_model::{Inventory, ItemKind};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque};

/// Counts how often each word appears, ignoring case and punctuation.
#[must_use]
pub fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in text
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|w| w.trim_matches('\'').to_lowercase())
        .filter(|w| !w.is_empty())
    {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

/// The `n` most common words, ties broken alphabetically.
#[must_use]
pub fn top_words(text: &str, n: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = word_frequencies(text).into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts.truncate(n);
    counts
}

/// Removes duplicate names, keeping the first occurrence of each.
#[must_use]
pub fn dedup_preserving_order<'a>(names: &[&'a str]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    names.iter().copied().filter(|n| seen.insert(*n)).collect()
}

/// Unique names in alphabetical order.
#[must_use]
pub fn unique_sorted<'a>(names: &[&'a str]) -> BTreeSet<&'a str> {
    names.iter().copied().collect()
}

/// Item names present in both inventories.
#[must_use]
pub fn shared_items<'a>(a: &'a Inventory, b: &'a Inventory) -> BTreeSet<&'a str> {
    let left: HashSet<&str> = a.iter().map(|i| i.name.as_str()).collect();
    b.iter()
        .map(|i| i.name.as_str())
        .filter(|n| left.contains(n))
        .collect()
}

/// Item names grouped by kind, kinds in declaration order.
#[must_use]
pub fn group_by_kind(inventory: &Inventory) -> BTreeMap<ItemKind, Vec<&str>> {
    let mut groups: BTreeMap<ItemKind, Vec<&str>> = BTreeMap::new();
    for item in inventory {
        groups.entry(item.kind).or_default().push(item.name.as_str());
    }
    groups
}

/// Best score per player.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    best: HashMap<String, u32>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a score; only a new personal best replaces the old one.
    /// Returns true when the score is a personal best.
    pub fn record(&mut self, player: &str, score: u32) -> bool {
        match self.best.get_mut(player) {
            Some(best) if *best >= score => false,
            Some(best) => {
                *best = score;
                true
            }
            None => {
                self.best.insert(player.to_string(), score);
                true
            }
        }
    }

    #[must_use]
    pub fn best(&self, player: &str) -> Option<u32> {
        self.best.get(player).copied()
    }

    /// Highest scores first, ties broken by name.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> =
            self.best.iter().map(|(p, s)| (p.as_str(), *s)).collect();
        ranked.sort_by_key(|&(p, s)| (Reverse(s), p));
        ranked.truncate(n);
        ranked
    }
}

/// Round-robin turn order.
#[derive(Debug, Clone, Default)]
pub struct TurnQueue {
    order: VecDeque<String>,
}

impl TurnQueue {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            order: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whose turn it is, moving them to the back of the line.
    pub fn next_turn(&mut self) -> Option<String> {
        let current = self.order.pop_front()?;
        self.order.push_back(current.clone());
        Some(current)
    }

    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.order.front().map(String::as_str)
    }

    /// Lets someone act immediately.
    pub fn cut_in(&mut self, name: impl Into<String>) {
        self.order.push_front(name.into());
    }

    /// Removes a fallen combatant. Returns false if they were not queued.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.order.iter().position(|n| n == name) {
            Some(pos) => {
                self.order.remove(pos);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Something scheduled for a future game tick.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Scheduled {
    tick: u64,
    seq: u64,
    label: String,
}

/// Min-heap of timed events; equal ticks fire in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct EventSchedule {
    heap: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl EventSchedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, tick: u64, label: impl Into<String>) {
        self.heap.push(Reverse(Scheduled {
            tick,
            seq: self.next_seq,
            label: label.into(),
        }));
        self.next_seq += 1;
    }

    /// Pops every event due at or before `tick`, earliest first.
    pub fn pop_due(&mut self, tick: u64) -> Vec<String> {
        let mut due = Vec::new();
        while self.heap.peek().is_some_and(|Reverse(s)| s.tick <= tick) {
            if let Some(Reverse(s)) = self.heap.pop() {
                due.push(s.label);
            }
        }
        due
    }

    #[must_use]
    pub fn next_tick(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(s)| s.tick)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
