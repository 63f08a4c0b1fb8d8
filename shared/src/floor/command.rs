//! Floor commands - requests issued by the UI layer

use crate::models::{Reservation, Role, Session};
use serde::{Deserialize, Serialize};

/// Command envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorCommand {
    /// Client-generated id, used for idempotency
    pub command_id: String,
    /// Operator who issued the command
    pub operator_email: String,
    /// Operator role, checked against the payload's required capability
    pub role: Role,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    pub payload: FloorCommandPayload,
}

impl FloorCommand {
    pub fn new(session: &Session, payload: FloorCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            operator_email: session.email.clone(),
            role: session.role,
            timestamp: crate::util::now_millis(),
            payload,
        }
    }
}

/// Command payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorCommandPayload {
    // ========== Reservations ==========
    AddReservation {
        reservation: Reservation,
    },
    DeleteReservation {
        reservation_id: String,
    },

    // ========== Table settings ==========
    AddTableSetting {
        table_number: String,
    },
    RemoveTableSetting {
        table_number: String,
    },

    // ========== Occupied tables ==========
    /// Seat a guest directly, without a reservation
    OpenTable {
        table_id: String,
        table_number: String,
        princess: String,
        budget: u64,
        time: String,
    },
    DeleteTable {
        table_id: String,
    },
    /// Convert a reservation into an occupied table
    AssignTable {
        reservation_id: String,
        table_number: String,
        time: String,
    },
}

impl FloorCommandPayload {
    /// Whether the payload needs the `can_manage_tables` capability
    pub fn requires_table_management(&self) -> bool {
        !matches!(
            self,
            FloorCommandPayload::AddReservation { .. }
                | FloorCommandPayload::DeleteReservation { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            FloorCommandPayload::AddReservation { .. } => "AddReservation",
            FloorCommandPayload::DeleteReservation { .. } => "DeleteReservation",
            FloorCommandPayload::AddTableSetting { .. } => "AddTableSetting",
            FloorCommandPayload::RemoveTableSetting { .. } => "RemoveTableSetting",
            FloorCommandPayload::OpenTable { .. } => "OpenTable",
            FloorCommandPayload::DeleteTable { .. } => "DeleteTable",
            FloorCommandPayload::AssignTable { .. } => "AssignTable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_table_management() {
        let add = FloorCommandPayload::AddReservation {
            reservation: Reservation::new("r1", "Airi", "T1", 5000),
        };
        let assign = FloorCommandPayload::AssignTable {
            reservation_id: "r1".to_string(),
            table_number: "T1".to_string(),
            time: "21:00".to_string(),
        };
        assert!(!add.requires_table_management());
        assert!(assign.requires_table_management());
    }

    #[test]
    fn test_payload_tagging() {
        let payload = FloorCommandPayload::DeleteTable {
            table_id: "x".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "DELETE_TABLE");
        assert_eq!(json["table_id"], "x");
    }
}
