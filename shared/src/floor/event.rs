//! Floor events - immutable facts recorded after command processing

use crate::models::{OccupiedTable, Reservation};
use serde::{Deserialize, Serialize};

/// Floor event - immutable audit record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorEvent {
    /// Event unique ID
    pub event_id: String,
    /// Sequence number (for ordering and replay)
    pub sequence: u64,
    /// Server timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Client timestamp preserved from the command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_timestamp: Option<i64>,
    /// Operator who triggered this event
    pub operator_email: String,
    /// Command that triggered this event
    pub command_id: String,
    pub event_type: FloorEventType,
    pub payload: EventPayload,
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorEventType {
    // Reservations
    ReservationAdded,
    ReservationDeleted,

    // Table settings
    TableSettingAdded,
    TableSettingRemoved,

    // Occupied tables
    TableOpened,
    TableDeleted,
    TableAssigned,
}

impl std::fmt::Display for FloorEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FloorEventType::ReservationAdded => write!(f, "RESERVATION_ADDED"),
            FloorEventType::ReservationDeleted => write!(f, "RESERVATION_DELETED"),
            FloorEventType::TableSettingAdded => write!(f, "TABLE_SETTING_ADDED"),
            FloorEventType::TableSettingRemoved => write!(f, "TABLE_SETTING_REMOVED"),
            FloorEventType::TableOpened => write!(f, "TABLE_OPENED"),
            FloorEventType::TableDeleted => write!(f, "TABLE_DELETED"),
            FloorEventType::TableAssigned => write!(f, "TABLE_ASSIGNED"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    // ========== Reservations ==========
    ReservationAdded {
        reservation: Reservation,
    },
    ReservationDeleted {
        reservation_id: String,
    },

    // ========== Table settings ==========
    TableSettingAdded {
        table_number: String,
    },
    TableSettingRemoved {
        table_number: String,
    },

    // ========== Occupied tables ==========
    TableOpened {
        table: OccupiedTable,
    },
    TableDeleted {
        table_id: String,
    },
    /// The reservation is consumed and the table created in one step
    TableAssigned {
        reservation_id: String,
        table: OccupiedTable,
    },
}

impl EventPayload {
    pub fn event_type(&self) -> FloorEventType {
        match self {
            EventPayload::ReservationAdded { .. } => FloorEventType::ReservationAdded,
            EventPayload::ReservationDeleted { .. } => FloorEventType::ReservationDeleted,
            EventPayload::TableSettingAdded { .. } => FloorEventType::TableSettingAdded,
            EventPayload::TableSettingRemoved { .. } => FloorEventType::TableSettingRemoved,
            EventPayload::TableOpened { .. } => FloorEventType::TableOpened,
            EventPayload::TableDeleted { .. } => FloorEventType::TableDeleted,
            EventPayload::TableAssigned { .. } => FloorEventType::TableAssigned,
        }
    }
}

impl FloorEvent {
    /// Create a new event
    ///
    /// The event type is derived from the payload; the server timestamp is
    /// taken now.
    pub fn new(
        sequence: u64,
        operator_email: String,
        command_id: String,
        client_timestamp: Option<i64>,
        payload: EventPayload,
    ) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            sequence,
            timestamp: crate::util::now_millis(),
            client_timestamp,
            operator_email,
            command_id,
            event_type: payload.event_type(),
            payload,
        }
    }
}
