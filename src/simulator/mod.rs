//! Step-by-step dry-run execution of a playbook.
//!
//! The simulator walks the resolver order one node at a time, advancing
//! each node through a small state machine (pending → running →
//! success/error) with a timed hold per transition, and reports progress
//! through a caller-supplied observer. Cancellation is cooperative:
//! pause/stop requests are observed at step boundaries, never mid-step,
//! and node visitation is totally ordered — no two nodes ever interleave.

mod evaluator;
mod log;

pub use evaluator::{CONDITION_FALSE, CONDITION_TRUE, Evaluator, SimulatedEvaluator};
pub use log::{LogEntry, LogStatus};

use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    Result, SimulatorConfig,
    model::{Node, NodeId, Playbook},
    resolver::resolve_order,
    utils,
};

/// Poll interval while a run is parked by `pause`.
const PAUSE_POLL_MS: u64 = 20;

/// Global state of a simulation run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Completed,
    Stopped,
}

/// Callbacks a host UI supplies to observe a run.
///
/// `on_node_enter` is the explicit per-node event a caller uses to
/// highlight the current node; the simulator keeps no notion of "current"
/// beyond its own loop position. `on_log` fires with a snapshot of an
/// entry at every status transition.
pub trait RunObserver: Send + Sync {
    fn on_node_enter(
        &self,
        _nid: &str,
    ) {
    }

    fn on_log(
        &self,
        _entry: &LogEntry,
    ) {
    }
}

/// Observer that ignores every event.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

#[derive(Default)]
struct Inner {
    state: Mutex<RunState>,
    log: Mutex<Vec<LogEntry>>,
    current: Mutex<Option<NodeId>>,
    paused: AtomicBool,
    stop_requested: AtomicBool,
    /// Bumped by `reset`; a run whose epoch is stale stops touching
    /// shared state.
    epoch: AtomicU64,
}

enum Checkpoint {
    Proceed,
    Stop,
}

/// Cooperative, single-threaded playbook execution simulator.
///
/// Clones share control state, so a clone handed to an observer or a UI
/// task can pause, resume, or stop the run.
#[derive(Clone)]
pub struct Simulator {
    config: SimulatorConfig,
    evaluator: Arc<dyn Evaluator>,
    inner: Arc<Inner>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Self {
        let evaluator = Arc::new(SimulatedEvaluator::new(config.true_branch_weight));
        Self {
            config,
            evaluator,
            inner: Arc::new(Inner::default()),
        }
    }

    /// Replaces the outcome evaluator, e.g. with a real rule engine.
    pub fn with_evaluator(
        mut self,
        evaluator: Arc<dyn Evaluator>,
    ) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Runs the playbook to completion or until stopped.
    ///
    /// Appends one log entry per node in resolver order and drives it to
    /// a terminal status before the next node starts; a node mid-flight
    /// when stop is requested still completes, so every appended entry is
    /// terminal when the run ends.
    pub async fn run(
        &self,
        playbook: &Playbook,
        observer: &dyn RunObserver,
    ) -> Result<RunState> {
        let order = resolve_order(playbook)?;

        let epoch = self.inner.epoch.load(Ordering::SeqCst);
        self.inner.stop_requested.store(false, Ordering::SeqCst);
        self.inner.paused.store(false, Ordering::SeqCst);
        self.inner.log.lock().unwrap().clear();
        self.set_state(epoch, RunState::Running);

        debug!(playbook = %playbook.name, nodes = order.len(), "simulation started");

        for node in order.iter() {
            if let Checkpoint::Stop = self.checkpoint(epoch).await {
                return Ok(self.finish(epoch, RunState::Stopped));
            }

            self.execute_node(epoch, node, observer).await;
        }

        self.inner.current.lock().unwrap().take();

        // a stop requested while the final node was mid-flight still
        // terminates the run as stopped
        if self.inner.stop_requested.load(Ordering::SeqCst) {
            return Ok(self.finish(epoch, RunState::Stopped));
        }
        Ok(self.finish(epoch, RunState::Completed))
    }

    /// Advances one node through pending → running → success.
    async fn execute_node(
        &self,
        epoch: u64,
        node: &Node,
        observer: &dyn RunObserver,
    ) {
        let mut entry = LogEntry {
            id: utils::shortid(),
            node_id: node.id.clone(),
            node_name: node.label.clone(),
            status: LogStatus::Pending,
            timestamp: utils::time::time_millis(),
            result: None,
        };

        trace!(nid = %node.id, "node enter");
        self.inner.current.lock().unwrap().replace(node.id.clone());
        self.push_entry(epoch, &entry);
        observer.on_node_enter(&node.id);
        observer.on_log(&entry);

        tokio::time::sleep(Duration::from_millis(self.config.pending_hold_ms)).await;

        entry.status = LogStatus::Running;
        self.update_entry(epoch, &entry);
        observer.on_log(&entry);

        tokio::time::sleep(Duration::from_millis(self.config.running_hold_ms)).await;

        let outcome = self.evaluator.evaluate(node).await;

        entry.status = LogStatus::Success;
        entry.result = Some(outcome);
        self.update_entry(epoch, &entry);
        observer.on_log(&entry);
    }

    /// Requests a pause; the run parks at the next step boundary.
    pub fn pause(&self) {
        self.inner.paused.store(true, Ordering::SeqCst);
    }

    /// Clears a pause request and lets a parked run continue.
    pub fn resume(&self) {
        self.inner.paused.store(false, Ordering::SeqCst);
    }

    /// Requests a stop; observed at the next step boundary.
    pub fn stop(&self) {
        self.inner.stop_requested.store(true, Ordering::SeqCst);
        self.inner.paused.store(false, Ordering::SeqCst);
    }

    /// Clears the log and the current-node reference and returns the
    /// simulator to idle. Safe to call whether or not a run is in
    /// progress; an in-flight run is implicitly stopped.
    pub fn reset(&self) {
        self.inner.epoch.fetch_add(1, Ordering::SeqCst);
        self.inner.stop_requested.store(true, Ordering::SeqCst);
        self.inner.paused.store(false, Ordering::SeqCst);
        self.inner.log.lock().unwrap().clear();
        self.inner.current.lock().unwrap().take();
        *self.inner.state.lock().unwrap() = RunState::Idle;
    }

    /// Snapshot of the run log.
    pub fn log(&self) -> Vec<LogEntry> {
        self.inner.log.lock().unwrap().clone()
    }

    pub fn state(&self) -> RunState {
        *self.inner.state.lock().unwrap()
    }

    /// The node currently being visited, if any.
    pub fn current_node(&self) -> Option<NodeId> {
        self.inner.current.lock().unwrap().clone()
    }

    /// Waits out a pause and reports whether the run may proceed.
    async fn checkpoint(
        &self,
        epoch: u64,
    ) -> Checkpoint {
        loop {
            if self.stale(epoch) || self.inner.stop_requested.load(Ordering::SeqCst) {
                return Checkpoint::Stop;
            }
            if !self.inner.paused.load(Ordering::SeqCst) {
                return Checkpoint::Proceed;
            }
            tokio::time::sleep(Duration::from_millis(PAUSE_POLL_MS)).await;
        }
    }

    fn stale(
        &self,
        epoch: u64,
    ) -> bool {
        self.inner.epoch.load(Ordering::SeqCst) != epoch
    }

    fn push_entry(
        &self,
        epoch: u64,
        entry: &LogEntry,
    ) {
        if self.stale(epoch) {
            return;
        }
        self.inner.log.lock().unwrap().push(entry.clone());
    }

    fn update_entry(
        &self,
        epoch: u64,
        entry: &LogEntry,
    ) {
        if self.stale(epoch) {
            return;
        }
        let mut log = self.inner.log.lock().unwrap();
        if let Some(existing) = log.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry.clone();
        }
    }

    fn set_state(
        &self,
        epoch: u64,
        state: RunState,
    ) {
        if self.stale(epoch) {
            return;
        }
        *self.inner.state.lock().unwrap() = state;
    }

    fn finish(
        &self,
        epoch: u64,
        state: RunState,
    ) -> RunState {
        debug!(state = state.as_ref(), "simulation finished");
        self.set_state(epoch, state);
        state
    }
}
