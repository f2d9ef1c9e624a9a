//! Error types for soarflow.
//!
//! All errors in soarflow are represented by the `SoarflowError` enum,
//! which provides specific variants for different error categories.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all soarflow operations.
///
/// Each variant represents a specific category of error that can occur
/// while loading, resolving, simulating, or exporting a playbook.
#[derive(Deserialize, Serialize, Error, Debug, Clone, PartialEq)]
pub enum SoarflowError {
    /// Playbook definition errors (parse failures, duplicate ids).
    #[error("{0}")]
    Playbook(String),

    /// Node definition errors.
    #[error("{0}")]
    Node(String),

    /// Edge definition errors.
    #[error("{0}")]
    Edge(String),

    /// Graph construction or traversal errors.
    #[error("{0}")]
    Graph(String),

    /// Simulation run errors.
    #[error("{0}")]
    Run(String),

    /// Export generation errors.
    #[error("{0}")]
    Export(String),

    /// Configuration parsing or validation errors.
    #[error("{0}")]
    Config(String),

    /// Data conversion errors (JSON, TOML).
    #[error("{0}")]
    Convert(String),
}

impl From<SoarflowError> for String {
    fn from(val: SoarflowError) -> Self {
        val.to_string()
    }
}

impl From<serde_json::Error> for SoarflowError {
    fn from(error: serde_json::Error) -> Self {
        SoarflowError::Convert(error.to_string())
    }
}
