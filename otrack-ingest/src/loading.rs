use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

/// One labeled phase of a simulated loading sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingStep {
    pub message: String,
    pub duration: Duration,
}

impl LoadingStep {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            duration,
        }
    }
}

/// Point-in-time view of a running simulation
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    pub step_index: usize,
    pub step_count: usize,
    pub message: Option<String>,
    /// Fraction of the current step elapsed, 0..=100
    pub step_progress: f64,
    /// Fraction of the whole sequence elapsed, 0..=100
    pub overall_progress: f64,
    pub complete: bool,
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Running,
    /// Returned exactly once, on the tick that finishes the last step
    Completed,
    /// Already complete; nothing left to drive
    Idle,
}

/// Staged loading state machine with explicit state, advanced by `tick`.
/// Steps are consumed strictly in sequence; a step ends when wall-clock
/// time since entering it reaches the step's duration.
#[derive(Debug)]
pub struct LoadingSimulation {
    steps: Vec<LoadingStep>,
    step_index: usize,
    step_started: Option<Instant>,
    step_progress: f64,
    completed: bool,
}

impl LoadingSimulation {
    pub fn new(steps: Vec<LoadingStep>) -> Self {
        Self {
            steps,
            step_index: 0,
            step_started: None,
            step_progress: 0.0,
            completed: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Advance the machine to `now`. The current step's clock starts on
    /// the first tick that observes it.
    pub fn tick(&mut self, now: Instant) -> Advance {
        if self.completed {
            return Advance::Idle;
        }
        if self.step_index >= self.steps.len() {
            // empty step list completes on the first tick
            self.completed = true;
            return Advance::Completed;
        }

        let step = &self.steps[self.step_index];
        let started = *self.step_started.get_or_insert(now);
        let elapsed = now.duration_since(started);
        self.step_progress = step_ratio(elapsed, step.duration);

        if elapsed >= step.duration {
            self.step_index += 1;
            self.step_started = Some(now);
            self.step_progress = 0.0;
            if self.step_index >= self.steps.len() {
                self.completed = true;
                return Advance::Completed;
            }
        }
        Advance::Running
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        let step_count = self.steps.len();
        let overall_progress = if self.completed || step_count == 0 {
            100.0
        } else {
            (self.step_index as f64 / step_count as f64) * 100.0
                + self.step_progress / step_count as f64
        };

        ProgressSnapshot {
            step_index: self.step_index,
            step_count,
            message: self.steps.get(self.step_index).map(|s| s.message.clone()),
            step_progress: self.step_progress,
            overall_progress,
            complete: self.completed,
        }
    }
}

/// Elapsed fraction of a step as a percentage. Non-positive durations
/// resolve immediately: the ratio clamps to 100 instead of dividing.
fn step_ratio(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 100.0;
    }
    ((elapsed.as_secs_f64() / duration.as_secs_f64()) * 100.0).min(100.0)
}

/// Drives a `LoadingSimulation` on a background task, publishing
/// snapshots through a watch channel
pub struct SimulationDriver;

impl SimulationDriver {
    /// Spawn the driver. `on_complete` fires exactly once, when the last
    /// step's duration elapses; it never fires after `cancel`.
    pub fn spawn<F>(
        mut simulation: LoadingSimulation,
        tick_interval: Duration,
        on_complete: F,
    ) -> SimulationHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let (tx, rx) = watch::channel(simulation.snapshot());
        let task = tokio::spawn(async move {
            let mut on_complete = Some(on_complete);
            let mut ticker = tokio::time::interval(tick_interval);
            loop {
                ticker.tick().await;
                let advance = simulation.tick(Instant::now());
                let _ = tx.send(simulation.snapshot());
                match advance {
                    Advance::Running => {}
                    Advance::Completed => {
                        debug!("loading simulation complete");
                        if let Some(callback) = on_complete.take() {
                            callback();
                        }
                        break;
                    }
                    Advance::Idle => break,
                }
            }
        });

        SimulationHandle { progress: rx, task }
    }
}

/// Owner's handle to a running simulation. Dropping the receiver side is
/// fine; cancelling stops all further ticks.
pub struct SimulationHandle {
    progress: watch::Receiver<ProgressSnapshot>,
    task: JoinHandle<()>,
}

impl SimulationHandle {
    pub fn progress(&self) -> watch::Receiver<ProgressSnapshot> {
        self.progress.clone()
    }

    /// Stop the driver; no further snapshots are published and the
    /// completion callback never fires
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Wait for the driver task to finish (completion or cancellation)
    pub async fn wait(self) {
        let _ = self.task.await;
    }
}
