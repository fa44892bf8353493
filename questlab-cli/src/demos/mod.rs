//! The demo registry.
//!
//! A demo is a plain function that tells a short story on the context's
//! writer. Demos never share state; each builds what it needs from the
//! config.

mod basics;
mod model;
mod patterns;
mod ui;

use crate::QuestlabConfig;
use anyhow::{Context, bail};
use clap::ValueEnum;
use questlab_patterns::factory::close_names;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::io::Write;
use tokio::runtime::Runtime;

/// Which lecture a demo belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Topic {
    /// Structs, enums and ownership in the game model.
    Model,
    /// Errors, iterators, collections, time and files.
    Basics,
    /// Traits and the classic object-oriented patterns.
    Patterns,
    /// View models behind the GUI windows.
    Ui,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Model => "model",
            Self::Basics => "basics",
            Self::Patterns => "patterns",
            Self::Ui => "ui",
        })
    }
}

pub type DemoFn = fn(&mut DemoContext<'_>) -> anyhow::Result<()>;

pub struct Demo {
    pub name: &'static str,
    pub topic: Topic,
    pub summary: &'static str,
    pub run: DemoFn,
}

impl fmt::Debug for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Demo")
            .field("name", &self.name)
            .field("topic", &self.topic)
            .finish_non_exhaustive()
    }
}

/// What a running demo can reach: somewhere to write and the loaded config.
pub struct DemoContext<'a> {
    pub out: &'a mut dyn Write,
    pub config: &'a QuestlabConfig,
    runtime: Option<Runtime>,
}

impl<'a> DemoContext<'a> {
    pub fn new(out: &'a mut dyn Write, config: &'a QuestlabConfig) -> Self {
        Self {
            out,
            config,
            runtime: None,
        }
    }

    /// A random generator seeded from the config, or from the OS when no
    /// seed is set.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Runs a future to completion on a runtime created on first use.
    pub fn block_on<F: std::future::Future>(&mut self, future: F) -> anyhow::Result<F::Output> {
        if self.runtime.is_none() {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .context("failed to start the async runtime")?;
            self.runtime = Some(runtime);
        }
        match &self.runtime {
            Some(runtime) => Ok(runtime.block_on(future)),
            None => bail!("async runtime unavailable"),
        }
    }
}

static DEMOS: &[Demo] = &[
    // model
    Demo {
        name: "characters",
        topic: Topic::Model,
        summary: "Health that clamps, attacks, healing and levelling up",
        run: model::characters,
    },
    Demo {
        name: "inventory",
        topic: Topic::Model,
        summary: "A capacity-limited bag of items",
        run: model::inventory,
    },
    Demo {
        name: "quests",
        topic: Topic::Model,
        summary: "Accepting quests and collecting each reward exactly once",
        run: model::quests,
    },
    Demo {
        name: "events",
        topic: Topic::Model,
        summary: "Game events as tagged enums, narrated and serialized",
        run: model::events,
    },
    // basics
    Demo {
        name: "errors",
        topic: Topic::Basics,
        summary: "Typed input errors, checked division and default fallbacks",
        run: basics::errors,
    },
    Demo {
        name: "iterators",
        topic: Topic::Basics,
        summary: "Custom iterators, seeded loot rolls and adapter chains",
        run: basics::iterators,
    },
    Demo {
        name: "collections",
        topic: Topic::Basics,
        summary: "Maps, sets, queues and heaps",
        run: basics::collections,
    },
    Demo {
        name: "datetime",
        topic: Topic::Basics,
        summary: "Deadlines, daily resets and timestamp formats",
        run: basics::datetime,
    },
    Demo {
        name: "filesystem",
        topic: Topic::Basics,
        summary: "An append-only log, save-slot listing and atomic writes",
        run: basics::filesystem,
    },
    Demo {
        name: "save",
        topic: Topic::Basics,
        summary: "Save files as key/value text and as JSON",
        run: basics::save,
    },
    // patterns
    Demo {
        name: "inheritance",
        topic: Topic::Patterns,
        summary: "A Creature trait with default methods and a Boss built on a Monster",
        run: patterns::inheritance,
    },
    Demo {
        name: "polymorphism",
        topic: Topic::Patterns,
        summary: "Heroes of different classes behind one trait object",
        run: patterns::polymorphism,
    },
    Demo {
        name: "shapes",
        topic: Topic::Patterns,
        summary: "Validated constructors and a Shape trait",
        run: patterns::shapes,
    },
    Demo {
        name: "operators",
        topic: Topic::Patterns,
        summary: "Operator overloading, indexing, parsing dice and a rollback guard",
        run: patterns::operators,
    },
    Demo {
        name: "singleton",
        topic: Topic::Patterns,
        summary: "One global settings instance, and the plain value alternative",
        run: patterns::singleton,
    },
    Demo {
        name: "factory",
        topic: Topic::Patterns,
        summary: "Enemies built from a kind or a registered name",
        run: patterns::factory,
    },
    Demo {
        name: "observer",
        topic: Topic::Patterns,
        summary: "An event bus feeding achievements and a narrator",
        run: patterns::observer,
    },
    Demo {
        name: "strategy",
        topic: Topic::Patterns,
        summary: "Swappable fighting styles and loot orderings",
        run: patterns::strategy,
    },
    Demo {
        name: "decorator",
        topic: Topic::Patterns,
        summary: "Wrapping functions and equipment with extra behavior",
        run: patterns::decorator,
    },
    Demo {
        name: "delegation",
        topic: Topic::Patterns,
        summary: "A pet that forwards to its companion",
        run: patterns::delegation,
    },
    // ui
    Demo {
        name: "counter",
        topic: Topic::Ui,
        summary: "Three buttons and a number",
        run: ui::counter,
    },
    Demo {
        name: "calculator",
        topic: Topic::Ui,
        summary: "A keypad calculator that reports errors in a dialog",
        run: ui::calculator,
    },
    Demo {
        name: "table",
        topic: Topic::Ui,
        summary: "An inventory table with sorting and selection",
        run: ui::table,
    },
    Demo {
        name: "tree",
        topic: Topic::Ui,
        summary: "Quests grouped by status in a collapsible tree",
        run: ui::tree,
    },
    Demo {
        name: "canvas",
        topic: Topic::Ui,
        summary: "Click to draw shapes, undo and hit-test",
        run: ui::canvas,
    },
    Demo {
        name: "menu",
        topic: Topic::Ui,
        summary: "Menu items and shortcuts bound to callbacks",
        run: ui::menu,
    },
    Demo {
        name: "form",
        topic: Topic::Ui,
        summary: "A character form that validates every field",
        run: ui::form,
    },
    Demo {
        name: "progress",
        topic: Topic::Ui,
        summary: "A background task reporting progress, then cancelled",
        run: ui::progress,
    },
];

/// Every demo, grouped by topic.
#[must_use]
pub fn all() -> &'static [Demo] {
    DEMOS
}

pub fn by_topic(topic: Topic) -> impl Iterator<Item = &'static Demo> {
    DEMOS.iter().filter(move |d| d.topic == topic)
}

/// Looks a demo up by name, case-insensitively. The error lists close
/// names when there are any.
pub fn find(name: &str) -> anyhow::Result<&'static Demo> {
    let wanted = name.trim();
    if let Some(demo) = DEMOS.iter().find(|d| d.name.eq_ignore_ascii_case(wanted)) {
        return Ok(demo);
    }
    let suggestions = close_names(wanted, DEMOS.iter().map(|d| d.name));
    if suggestions.is_empty() {
        bail!("unknown demo {name:?}; run `questlab list` to see them all");
    }
    bail!(
        "unknown demo {name:?}; did you mean {}?",
        suggestions.join(" or ")
    )
}

/// Runs one demo under a heading.
pub fn run(demo: &Demo, ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    writeln!(ctx.out, "== {} ({}) ==", demo.name, demo.topic)?;
    tracing::debug!(demo = demo.name, "Running demo");
    (demo.run)(ctx).with_context(|| format!("demo {:?} failed", demo.name))?;
    writeln!(ctx.out)?;
    Ok(())
}
