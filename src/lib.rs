//! # soarflow
//!
//! soarflow is an embeddable security-orchestration playbook engine.
//! It models a response procedure as a directed graph of trigger,
//! condition, and action nodes, and provides the three operations a host
//! dashboard needs on that graph:
//!
//! - **Resolve**: linearize the graph into a deterministic visitation
//!   order starting from its trigger nodes
//! - **Simulate**: walk that order as a step-by-step dry run with
//!   cooperative pause/stop and per-transition progress callbacks
//! - **Export**: serialize the same graph into one of five downstream
//!   automation-platform schemas
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use soarflow::{Playbook, Simulator, NoopObserver, export, resolve_order};
//!
//! let playbook = Playbook::from_json(json_str)?;
//! let order = resolve_order(&playbook)?;
//!
//! let simulator = Simulator::default();
//! simulator.run(&playbook, &NoopObserver).await?;
//!
//! let file = export("xsoar", &playbook.name, &playbook);
//! ```

mod config;
mod error;
mod export;
mod model;
mod resolver;
mod simulator;
mod templates;
mod utils;

pub use config::{Config, SimulatorConfig};
pub use error::SoarflowError;
pub use export::{Export, ExportTarget, TargetInfo, export, targets};
pub use model::*;
pub use resolver::resolve_order;
pub use simulator::{CONDITION_FALSE, CONDITION_TRUE, Evaluator, LogEntry, LogStatus, NoopObserver, RunObserver, RunState, SimulatedEvaluator, Simulator};
pub use templates::{PlaybookTemplate, catalog};

/// Result type alias for soarflow operations.
pub type Result<T> = std::result::Result<T, SoarflowError>;
