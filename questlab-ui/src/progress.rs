//! A background worker that reports progress to the UI side.
//!
//! The worker runs as a tokio task and sends [`ProgressSignal`]s over an
//! mpsc channel. Closing the window maps to [`ProgressWorker::cancel`], to
//! dropping the worker, or to dropping the receiver; any of them stops the
//! task at its next step.

use crate::{UiError, UiResult, View};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

const CHANNEL_CAPACITY: usize = 16;
const BAR_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSignal {
    Started { total: u32 },
    /// Percent complete, `0..=100`.
    Progress(u8),
    Finished,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerOutcome {
    Completed,
    Cancelled,
}

/// Handle to a running worker task.
#[derive(Debug)]
pub struct ProgressWorker {
    cancel_tx: watch::Sender<bool>,
    handle: JoinHandle<WorkerOutcome>,
}

impl ProgressWorker {
    /// Spawns a worker doing `steps` units of work, each taking
    /// `step_delay`. Must be called from within a tokio runtime.
    pub fn spawn(steps: u32, step_delay: Duration) -> (Self, mpsc::Receiver<ProgressSignal>) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let handle = tokio::spawn(run(steps, step_delay, tx, cancel_rx));
        info!(steps, ?step_delay, "Progress worker started");
        (Self { cancel_tx, handle }, rx)
    }

    /// Asks the worker to stop. It sends [`ProgressSignal::Cancelled`]
    /// before exiting.
    pub fn cancel(&self) {
        self.cancel_tx.send_replace(true);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the task to exit.
    pub async fn join(self) -> UiResult<WorkerOutcome> {
        self.handle
            .await
            .map_err(|e| UiError::Worker(e.to_string()))
    }
}

async fn run(
    steps: u32,
    step_delay: Duration,
    tx: mpsc::Sender<ProgressSignal>,
    mut cancel_rx: watch::Receiver<bool>,
) -> WorkerOutcome {
    if tx.send(ProgressSignal::Started { total: steps }).await.is_err() {
        return WorkerOutcome::Cancelled;
    }
    for step in 1..=steps {
        tokio::select! {
            biased;
            // A dropped handle also counts as a cancel.
            _ = cancel_rx.changed() => {
                debug!(step, "Progress worker cancelled");
                // The receiver may already be gone.
                let _ = tx.send(ProgressSignal::Cancelled).await;
                return WorkerOutcome::Cancelled;
            }
            () = tokio::time::sleep(step_delay) => {}
        }
        if tx.send(ProgressSignal::Progress(percent(step, steps))).await.is_err() {
            debug!(step, "Progress receiver dropped");
            return WorkerOutcome::Cancelled;
        }
    }
    let _ = tx.send(ProgressSignal::Finished).await;
    info!(steps, "Progress worker finished");
    WorkerOutcome::Completed
}

fn percent(step: u32, steps: u32) -> u8 {
    let pct = u64::from(step) * 100 / u64::from(steps.max(1));
    u8::try_from(pct.min(100)).unwrap_or(100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarState {
    #[default]
    Idle,
    Running,
    Done,
    Cancelled,
}

impl BarState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

/// The progress bar widget, driven by a worker's signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressBar {
    percent: u8,
    state: BarState,
}

impl ProgressBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[must_use]
    pub fn state(&self) -> BarState {
        self.state
    }

    pub fn apply(&mut self, signal: ProgressSignal) -> BarState {
        match signal {
            ProgressSignal::Started { .. } => {
                self.percent = 0;
                self.state = BarState::Running;
            }
            ProgressSignal::Progress(pct) => self.percent = pct.min(100),
            ProgressSignal::Finished => {
                self.percent = 100;
                self.state = BarState::Done;
            }
            ProgressSignal::Cancelled => self.state = BarState::Cancelled,
        }
        self.state
    }

    /// Consumes signals until the worker finishes or is cancelled. A channel
    /// that closes mid-run leaves the bar cancelled.
    pub async fn follow(&mut self, rx: &mut mpsc::Receiver<ProgressSignal>) -> BarState {
        while let Some(signal) = rx.recv().await {
            if self.apply(signal).is_terminal() {
                return self.state;
            }
        }
        if !self.state.is_terminal() {
            self.state = BarState::Cancelled;
        }
        self.state
    }
}

impl View for ProgressBar {
    fn title(&self) -> &str {
        "Progress"
    }

    /// `[#####-----] 50%`, with the state appended once the run has ended
    /// early.
    fn render(&self) -> String {
        let filled = usize::from(self.percent) * BAR_WIDTH / 100;
        let mut out = format!(
            "[{}{}] {}%",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            self.percent
        );
        if self.state == BarState::Cancelled {
            out.push_str(" (cancelled)");
        }
        out
    }
}
