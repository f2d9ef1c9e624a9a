use serde::{Deserialize, Serialize};

use crate::model::NodeId;

/// Status of a single log entry during a simulation run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LogStatus {
    #[default]
    Pending,
    Running,
    Success,
    Error,
}

impl LogStatus {
    /// Whether this status is terminal for an entry.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LogStatus::Success | LogStatus::Error)
    }
}

/// One entry of the simulation log.
///
/// Entries are appended in visitation order, one per node visited, and
/// are never reordered or removed for the duration of a run. The same
/// entry transitions pending → running → terminal in place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Entry identifier, unique within a run.
    pub id: String,
    /// Node this entry belongs to.
    pub node_id: NodeId,
    /// Display name of the node at the time it was visited.
    pub node_name: String,
    /// Current entry status.
    pub status: LogStatus,
    /// Millisecond timestamp of the entry's creation.
    pub timestamp: i64,
    /// Terminal outcome text, set once the entry completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}
