//! Decorators, two ways.
//!
//! Function decorators are higher-order functions that take a closure and
//! return a new closure with extra behavior: [`logged`], [`timed`],
//! [`requires_alive`], and the memoizing [`Cached`].
//!
//! Object decorators are wrapper types around anything that implements
//! [`Equipment`]. They stack: `Cursed<Enchanted<Sword>>`.

use crate::{PatternError, PatternResult};
use questlab_model::Character;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tracing::{debug, info};

// ── Function decorators ──────────────────────────────────────────

/// Logs every call with its argument and result.
pub fn logged<A, R, F>(name: &'static str, f: F) -> impl Fn(A) -> R
where
    A: Debug,
    R: Debug,
    F: Fn(A) -> R,
{
    move |arg| {
        let shown = format!("{arg:?}");
        let result = f(arg);
        info!(function = name, arg = %shown, result = ?result, "Call");
        result
    }
}

/// Measures each call and returns the elapsed time alongside the result.
pub fn timed<A, R, F>(name: &'static str, f: F) -> impl Fn(A) -> (R, Duration)
where
    F: Fn(A) -> R,
{
    move |arg| {
        let start = Instant::now();
        let result = f(arg);
        let elapsed = start.elapsed();
        debug!(function = name, elapsed_us = elapsed.as_micros() as u64, "Timed call");
        (result, elapsed)
    }
}

/// Runs `action` only when the character is alive; otherwise returns a
/// precondition error and leaves the character untouched.
pub fn requires_alive<R, F>(action: F) -> impl Fn(&mut Character) -> PatternResult<R>
where
    F: Fn(&mut Character) -> R,
{
    move |character: &mut Character| {
        if !character.is_alive() {
            return Err(PatternError::Precondition(format!(
                "{} is defeated",
                character.name
            )));
        }
        Ok(action(character))
    }
}

/// Memoizes a pure function by argument.
pub struct Cached<A, R, F> {
    f: F,
    cache: HashMap<A, R>,
    hits: u64,
    misses: u64,
}

/// Wraps `f` in a [`Cached`].
pub fn cached<A, R, F>(f: F) -> Cached<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(&A) -> R,
{
    Cached {
        f,
        cache: HashMap::new(),
        hits: 0,
        misses: 0,
    }
}

impl<A, R, F> Cached<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(&A) -> R,
{
    pub fn call(&mut self, arg: A) -> R {
        if let Some(hit) = self.cache.get(&arg) {
            self.hits += 1;
            return hit.clone();
        }
        self.misses += 1;
        let result = (self.f)(&arg);
        self.cache.insert(arg, result.clone());
        result
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

// ── Object decorators ────────────────────────────────────────────

pub trait Equipment {
    fn name(&self) -> String;
    fn damage(&self) -> u32;
    fn value(&self) -> u32;

    fn describe(&self) -> String {
        format!("{} (dmg {}, {}g)", self.name(), self.damage(), self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sword {
    pub name: String,
    pub damage: u32,
    pub value: u32,
}

impl Sword {
    pub fn new(name: impl Into<String>, damage: u32, value: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            value,
        }
    }
}

impl Equipment for Sword {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn damage(&self) -> u32 {
        self.damage
    }

    fn value(&self) -> u32 {
        self.value
    }
}

/// Adds elemental damage; each point of bonus adds 10 gold of value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enchanted<E> {
    inner: E,
    element: &'static str,
    bonus: u32,
}

impl<E: Equipment> Enchanted<E> {
    pub fn new(inner: E, element: &'static str, bonus: u32) -> Self {
        Self {
            inner,
            element,
            bonus,
        }
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Equipment> Equipment for Enchanted<E> {
    fn name(&self) -> String {
        format!("{} of {}", self.inner.name(), self.element)
    }

    fn damage(&self) -> u32 {
        self.inner.damage().saturating_add(self.bonus)
    }

    fn value(&self) -> u32 {
        self.inner.value()
            .saturating_add(self.bonus.saturating_mul(10))
    }
}

/// Halves the value. Damage is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursed<E> {
    inner: E,
}

impl<E: Equipment> Cursed<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// Removing a curse gives back the wrapped item.
    pub fn lift(self) -> E {
        self.inner
    }
}

impl<E: Equipment> Equipment for Cursed<E> {
    fn name(&self) -> String {
        format!("Cursed {}", self.inner.name())
    }

    fn damage(&self) -> u32 {
        self.inner.damage()
    }

    fn value(&self) -> u32 {
        self.inner.value() / 2
    }
}
