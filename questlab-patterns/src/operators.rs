//! Operator overloading and protocol traits.
//!
//! - [`Vector2`] implements the arithmetic operators from `std::ops`
//! - [`Bag`] behaves like a built-in container (`Index`, `IntoIterator`,
//!   `Extend`, `FromIterator`)
//! - [`Dice`] is a value you "call" through a named method
//! - [`Transaction`] is a scope guard: gold spent inside it comes back on
//!   drop unless the transaction is committed

use crate::{PatternError, PatternResult};
use rand::Rng;
use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, Neg, Sub};
use std::str::FromStr;
use tracing::{debug, info};

// ── Vector2 ──────────────────────────────────────────────────────

/// A 2D position or velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 { Self::ZERO } else { self * (1.0 / len) }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Bag ──────────────────────────────────────────────────────────

/// An unbounded sack of things that acts like a std container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag<T> {
    items: Vec<T>,
}

impl<T> Bag<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn put(&mut self, item: T) {
        self.items.push(item);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Bag<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Bag<T> {
    type Output = T;

    /// Panics when out of bounds, like slice indexing. Use [`Bag::get`] to
    /// check first.
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Bag<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ── Dice ─────────────────────────────────────────────────────────

/// `count` dice with `sides` faces each, written `2d6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dice {
    count: u32,
    sides: u32,
}

pub const MAX_DICE: u32 = 100;
pub const MAX_SIDES: u32 = 1000;

impl Dice {
    /// `count` must be in `1..=MAX_DICE` and `sides` in `1..=MAX_SIDES`.
    pub fn new(count: u32, sides: u32) -> PatternResult<Self> {
        if !(1..=MAX_DICE).contains(&count) || !(1..=MAX_SIDES).contains(&sides) {
            return Err(PatternError::InvalidDice(format!("{count}d{sides}")));
        }
        Ok(Self { count, sides })
    }

    /// Rolls every die and sums the faces.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        (0..self.count).map(|_| rng.gen_range(1..=self.sides)).sum()
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.count * self.sides
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl FromStr for Dice {
    type Err = PatternError;

    /// Parses `NdM`; a missing count means one die (`d20`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PatternError::InvalidDice(s.to_string());
        let notation = s.trim().to_lowercase();
        let (count, sides) = notation.split_once('d').ok_or_else(invalid)?;
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| invalid())?
        };
        let sides = sides.parse::<u32>().map_err(|_| invalid())?;
        Self::new(count, sides).map_err(|_| invalid())
    }
}

// ── Transaction ──────────────────────────────────────────────────

/// A gold purse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wallet {
    pub gold: u32,
}

impl Wallet {
    #[must_use]
    pub fn new(gold: u32) -> Self {
        Self { gold }
    }

    /// Starts a transaction over this wallet.
    pub fn begin(&mut self) -> Transaction<'_> {
        Transaction::begin(self)
    }
}

/// Changes made through a transaction are undone when it is dropped
/// without [`Transaction::commit`].
#[derive(Debug)]
pub struct Transaction<'a> {
    wallet: &'a mut Wallet,
    opening_balance: u32,
    committed: bool,
}

impl<'a> Transaction<'a> {
    pub fn begin(wallet: &'a mut Wallet) -> Self {
        let opening_balance = wallet.gold;
        debug!(gold = opening_balance, "Transaction started");
        Self {
            wallet,
            opening_balance,
            committed: false,
        }
    }

    #[must_use]
    pub fn balance(&self) -> u32 {
        self.wallet.gold
    }

    pub fn spend(&mut self, amount: u32) -> PatternResult<()> {
        let available = self.wallet.gold;
        self.wallet.gold = available
            .checked_sub(amount)
            .ok_or(PatternError::InsufficientGold {
                needed: amount,
                available,
            })?;
        Ok(())
    }

    pub fn earn(&mut self, amount: u32) {
        self.wallet.gold = self.wallet.gold.saturating_add(amount);
    }

    /// Keeps the changes.
    pub fn commit(mut self) {
        self.committed = true;
        info!(
            before = self.opening_balance,
            after = self.wallet.gold,
            "Transaction committed"
        );
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.committed {
            info!(
                restored = self.opening_balance,
                discarded = self.wallet.gold,
                "Transaction rolled back"
            );
            self.wallet.gold = self.opening_balance;
        }
    }
}
