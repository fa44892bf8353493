use pretty_assertions::assert_eq;
use questlab_ui::{BarState, ProgressBar, ProgressSignal, ProgressWorker, View, WorkerOutcome};
use std::time::Duration;

async fn drain(rx: &mut tokio::sync::mpsc::Receiver<ProgressSignal>) -> Vec<ProgressSignal> {
    let mut signals = Vec::new();
    while let Some(signal) = rx.recv().await {
        signals.push(signal);
    }
    signals
}

// ── Worker ───────────────────────────────────────────────────────

#[tokio::test]
async fn worker_reports_every_step() {
    let (worker, mut rx) = ProgressWorker::spawn(4, Duration::from_millis(1));
    let signals = drain(&mut rx).await;
    assert_eq!(
        signals,
        [
            ProgressSignal::Started { total: 4 },
            ProgressSignal::Progress(25),
            ProgressSignal::Progress(50),
            ProgressSignal::Progress(75),
            ProgressSignal::Progress(100),
            ProgressSignal::Finished,
        ]
    );
    assert_eq!(worker.join().await.unwrap(), WorkerOutcome::Completed);
}

#[tokio::test]
async fn zero_steps_finish_immediately() {
    let (worker, mut rx) = ProgressWorker::spawn(0, Duration::from_secs(60));
    let signals = drain(&mut rx).await;
    assert_eq!(
        signals,
        [ProgressSignal::Started { total: 0 }, ProgressSignal::Finished]
    );
    assert_eq!(worker.join().await.unwrap(), WorkerOutcome::Completed);
}

#[tokio::test]
async fn cancel_stops_the_worker() {
    let (worker, mut rx) = ProgressWorker::spawn(10, Duration::from_secs(60));
    assert_eq!(rx.recv().await, Some(ProgressSignal::Started { total: 10 }));

    worker.cancel();
    assert_eq!(drain(&mut rx).await, [ProgressSignal::Cancelled]);
    assert_eq!(worker.join().await.unwrap(), WorkerOutcome::Cancelled);
}

#[tokio::test]
async fn dropping_the_handle_cancels() {
    let (worker, mut rx) = ProgressWorker::spawn(10, Duration::from_secs(60));
    drop(worker);
    let signals = drain(&mut rx).await;
    assert_eq!(signals.last(), Some(&ProgressSignal::Cancelled));
}

#[tokio::test]
async fn closing_the_window_cancels() {
    let (worker, rx) = ProgressWorker::spawn(3, Duration::from_millis(1));
    drop(rx);
    assert_eq!(worker.join().await.unwrap(), WorkerOutcome::Cancelled);
}

// ── Bar ──────────────────────────────────────────────────────────

#[tokio::test]
async fn bar_follows_worker_to_completion() {
    let (worker, mut rx) = ProgressWorker::spawn(2, Duration::from_millis(1));
    let mut bar = ProgressBar::new();
    assert_eq!(bar.follow(&mut rx).await, BarState::Done);
    assert_eq!(bar.percent(), 100);
    assert_eq!(bar.render(), "[##########] 100%");
    worker.join().await.unwrap();
}

#[tokio::test]
async fn bar_shows_cancellation() {
    let (worker, mut rx) = ProgressWorker::spawn(5, Duration::from_secs(60));
    worker.cancel();
    let mut bar = ProgressBar::new();
    assert_eq!(bar.follow(&mut rx).await, BarState::Cancelled);
    assert_eq!(bar.render(), "[----------] 0% (cancelled)");
}

#[test]
fn bar_applies_signals() {
    let mut bar = ProgressBar::new();
    assert_eq!(bar.state(), BarState::Idle);
    assert_eq!(bar.apply(ProgressSignal::Started { total: 3 }), BarState::Running);
    bar.apply(ProgressSignal::Progress(50));
    assert_eq!(bar.render(), "[#####-----] 50%");
    bar.apply(ProgressSignal::Progress(250));
    assert_eq!(bar.percent(), 100);
}
