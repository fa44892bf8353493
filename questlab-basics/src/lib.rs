//! Language fundamentals, told through the toy game world.
//!
//! Each module is one lecture:
//! - [`errors`] — typed parse errors, checked arithmetic, fallbacks to defaults
//! - [`iterators`] — custom iterators, seeded loot rolls, adapter chains
//! - [`collections`] — maps, sets, queues and heaps
//! - [`datetime`] — deadlines, daily resets, formatting and parsing
//! - [`filesystem`] — an append-only game log, save-slot listing, atomic writes
//! - [`save`] — save files as key/value text or JSON
//!
//! The modules do not depend on each other except through the shared
//! [`BasicsError`].

pub mod collections;
pub mod datetime;
mod error;
pub mod errors;
pub mod filesystem;
pub mod iterators;
pub mod save;

pub use error::{BasicsError, BasicsResult};
pub use errors::InputError;
pub use save::{GameState, SaveData, SaveFormat, SaveValue};
