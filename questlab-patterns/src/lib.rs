//! Object-oriented design, the Rust way.
//!
//! - [`inheritance`] — a `Creature` trait with default methods, and a boss
//!   that composes a monster and overrides its behavior
//! - [`polymorphism`] — heterogeneous `Box<dyn Creature>` collections and hero
//!   classes with their own special move
//! - [`shapes`] — an abstract `Shape` trait with no default area
//! - [`operators`] — `std::ops` overloads, a container type, a callable and a
//!   `Drop` scope guard
//! - [`singleton`] — process-wide settings via `OnceLock`, next to an
//!   explicitly passed settings value
//! - [`factory`] — enemies built by kind, by name, or from a runtime registry
//! - [`observer`] — an event bus with callback and channel subscribers
//! - [`strategy`] — swappable fighting styles and closure-based loot ordering
//! - [`decorator`] — higher-order wrappers and wrapper types for equipment
//! - [`delegation`] — explicit forwarding to an inner value

mod error;

pub mod decorator;
pub mod delegation;
pub mod factory;
pub mod inheritance;
pub mod observer;
pub mod operators;
pub mod polymorphism;
pub mod shapes;
pub mod singleton;
pub mod strategy;

pub use error::{PatternError, PatternResult};
pub use inheritance::{Boss, Creature, Monster, Player};
