//! The `questlab` command.
//!
//! - [`cli`] — argument parsing and command dispatch
//! - [`config`] — the optional `questlab.toml`
//! - [`demos`] — the demo registry, one entry per lecture example
//! - [`logging`] — tracing subscriber setup

pub mod cli;
pub mod config;
pub mod demos;
pub mod logging;

pub use cli::{Cli, Command};
pub use config::QuestlabConfig;
pub use demos::{Demo, DemoContext, Topic};
