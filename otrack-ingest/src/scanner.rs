use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::info;

use crate::generator::{OrderSource, SourceError};
use crate::loading::{LoadingSimulation, LoadingStep, ProgressSnapshot, SimulationDriver, SimulationHandle};
use otrack_shared::ParsedOrder;

/// Step sequence shown while "scanning" the channel inboxes
pub fn default_scan_steps() -> Vec<LoadingStep> {
    vec![
        LoadingStep::new("Connecting to channel inboxes", Duration::from_millis(400)),
        LoadingStep::new("Reading unprocessed messages", Duration::from_millis(600)),
        LoadingStep::new("Extracting order fields", Duration::from_millis(700)),
        LoadingStep::new("Structuring JSON output", Duration::from_millis(300)),
    ]
}

/// Runs the staged loading simulation and hands back parsed orders when
/// it completes, the way the original scan flow gated its results
pub struct InboxScanner<S> {
    source: Arc<S>,
    steps: Vec<LoadingStep>,
    tick_interval: Duration,
}

impl<S: OrderSource + 'static> InboxScanner<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            steps: default_scan_steps(),
            tick_interval: Duration::from_millis(16),
        }
    }

    pub fn with_steps(mut self, steps: Vec<LoadingStep>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Start a scan. Progress is observable on the returned job while the
    /// simulation runs; orders become available only after completion.
    pub fn start(&self, count: usize) -> ScanJob {
        info!(count, "starting inbox scan");

        let simulation = LoadingSimulation::new(self.steps.clone());
        let (done_tx, done_rx) = oneshot::channel();
        let handle = SimulationDriver::spawn(simulation, self.tick_interval, move || {
            let _ = done_tx.send(());
        });
        let progress = handle.progress();

        let source = Arc::clone(&self.source);
        let fetch = tokio::spawn(async move {
            if done_rx.await.is_err() {
                return Err(SourceError::Cancelled);
            }
            let orders = source.fetch_orders(count).await?;
            info!(found = orders.len(), "inbox scan complete");
            Ok(orders)
        });

        ScanJob {
            progress,
            simulation: handle,
            fetch,
        }
    }

    /// Convenience wrapper: run a scan to completion
    pub async fn scan(&self, count: usize) -> Result<Vec<ParsedOrder>, SourceError> {
        self.start(count).orders().await
    }
}

/// A scan in flight. Dropping or cancelling the job tears down the
/// simulation; no orders surface afterwards.
pub struct ScanJob {
    progress: watch::Receiver<ProgressSnapshot>,
    simulation: SimulationHandle,
    fetch: JoinHandle<Result<Vec<ParsedOrder>, SourceError>>,
}

impl ScanJob {
    pub fn progress(&self) -> watch::Receiver<ProgressSnapshot> {
        self.progress.clone()
    }

    pub fn cancel(&self) {
        self.simulation.cancel();
        self.fetch.abort();
    }

    /// Wait for the simulation to finish and return the parsed orders
    pub async fn orders(self) -> Result<Vec<ParsedOrder>, SourceError> {
        self.fetch.await.map_err(|_| SourceError::Cancelled)?
    }
}
