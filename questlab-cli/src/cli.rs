use crate::QuestlabConfig;
use crate::demos::{self, DemoContext, Topic};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "questlab")]
#[command(about = "Runnable examples for a course on Rust, set in a small game world")]
pub struct Cli {
    /// Path to a questlab.toml config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the demos with their topic and summary
    List {
        /// Only show demos for this topic
        #[arg(short, long, value_enum)]
        topic: Option<Topic>,
    },
    /// Run demos by name
    Run {
        /// Demo names, e.g. `calculator observer`
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        demos: Vec<String>,

        /// Run every demo in order
        #[arg(long)]
        all: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Runs the parsed command, writing everything meant for the user to
    /// `out`.
    pub fn execute(&self, config: &QuestlabConfig, out: &mut dyn Write) -> anyhow::Result<()> {
        match &self.command {
            Command::List { topic } => list(*topic, out),
            Command::Run { demos, all } => run(demos, *all, config, out),
            Command::Config => {
                write!(out, "{}", config.to_toml()?)?;
                Ok(())
            }
        }
    }
}

fn list(topic: Option<Topic>, out: &mut dyn Write) -> anyhow::Result<()> {
    let width = demos::all().iter().map(|d| d.name.len()).max().unwrap_or(0);
    let mut current = None;
    for demo in demos::all() {
        if topic.is_some_and(|t| t != demo.topic) {
            continue;
        }
        if current != Some(demo.topic) {
            writeln!(out, "{}:", demo.topic)?;
            current = Some(demo.topic);
        }
        writeln!(out, "  {:<width$}  {}", demo.name, demo.summary)?;
    }
    Ok(())
}

fn run(
    names: &[String],
    all: bool,
    config: &QuestlabConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    // Resolve every name before running anything.
    let selected = if all {
        demos::all().iter().collect::<Vec<_>>()
    } else {
        names
            .iter()
            .map(|name| demos::find(name))
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    info!(count = selected.len(), "Running demos");
    let mut ctx = DemoContext::new(out, config);
    for demo in selected {
        demos::run(demo, &mut ctx)?;
    }
    Ok(())
}
