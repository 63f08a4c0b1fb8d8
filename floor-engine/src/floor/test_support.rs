//! Fixtures shared by the floor unit tests

use shared::floor::{EventPayload, FloorEvent};
use shared::models::{OccupiedTable, Reservation, Role};

use super::traits::CommandMetadata;

pub fn metadata(role: Role) -> CommandMetadata {
    CommandMetadata {
        command_id: "cmd-1".to_string(),
        operator_email: "staff@example.com".to_string(),
        role,
        timestamp: 1_760_000_000_000,
    }
}

pub fn reservation(id: &str, princess: &str, requested_table: &str, budget: u64) -> Reservation {
    Reservation::new(id, princess, requested_table, budget)
}

pub fn occupied(id: &str, table_number: &str, princess: &str) -> OccupiedTable {
    OccupiedTable {
        id: id.to_string(),
        table_number: table_number.to_string(),
        princess: princess.to_string(),
        budget: 5000,
        time: "21:00".to_string(),
    }
}

pub fn event(sequence: u64, payload: EventPayload) -> FloorEvent {
    FloorEvent::new(
        sequence,
        "staff@example.com".to_string(),
        format!("cmd-{sequence}"),
        None,
        payload,
    )
}
