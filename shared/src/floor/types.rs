//! Command responses, error codes and sync types

use super::event::FloorEvent;
use super::snapshot::FloorSnapshot;
use serde::{Deserialize, Serialize};

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    pub success: bool,
    /// Occupied table id (only for OpenTable / AssignTable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String, table_id: Option<String>) -> Self {
        Self {
            command_id,
            success: true,
            table_id,
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            table_id: None,
            error: Some(error),
        }
    }

    pub fn duplicate(command_id: String) -> Self {
        Self {
            command_id,
            success: true,
            table_id: None,
            error: None,
        }
    }

    pub fn error_code(&self) -> Option<&CommandErrorCode> {
        self.error.as_ref().map(|e| &e.code)
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes (the frontend localizes these)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    ReservationNotFound,
    DuplicateReservation,
    TableOccupied,
    InvalidInput,
    PermissionDenied,
    InternalError,
}

/// Sync request for reconnection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncRequest {
    /// Client's last known sequence number
    pub since_sequence: u64,
}

/// Sync response for reconnection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResponse {
    /// Events after the requested sequence
    pub events: Vec<FloorEvent>,
    /// Current sequence on the manager
    pub current_sequence: u64,
    /// The journal no longer reaches back to the requested sequence
    pub requires_full_sync: bool,
    /// Full state, only set with `requires_full_sync`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<FloorSnapshot>,
    /// Manager epoch; a change means the client must resync fully
    pub epoch: String,
}

impl SyncResponse {
    pub fn full_sync(snapshot: FloorSnapshot, epoch: String) -> Self {
        Self {
            events: vec![],
            current_sequence: snapshot.last_sequence,
            requires_full_sync: true,
            snapshot: Some(snapshot),
            epoch,
        }
    }

    pub fn incremental(events: Vec<FloorEvent>, current_sequence: u64, epoch: String) -> Self {
        Self {
            events,
            current_sequence,
            requires_full_sync: false,
            snapshot: None,
            epoch,
        }
    }
}
