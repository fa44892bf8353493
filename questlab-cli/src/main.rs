//! questlab: runnable examples for a course on Rust.
//!
//! Usage:
//!   questlab list [--topic patterns]
//!   questlab run calculator observer
//!   questlab run --all --config questlab.toml

use anyhow::Result;
use clap::Parser;
use questlab_cli::{Cli, QuestlabConfig, logging};
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = QuestlabConfig::load(cli.config.as_deref());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli.execute(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
