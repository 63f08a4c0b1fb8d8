//! Floor Event Sourcing Module
//!
//! Types for the reservation / table-assignment state machine:
//! - Commands: requests from the UI to change the floor
//! - Events: immutable facts recorded after command processing
//! - Snapshot: the current reservations, table settings and occupied tables
//! - View: filter names and the cards rendered on the table status screen

pub mod command;
pub mod event;
pub mod snapshot;
pub mod types;
pub mod view;

// Re-exports
pub use command::{FloorCommand, FloorCommandPayload};
pub use event::{EventPayload, FloorEvent, FloorEventType};
pub use snapshot::FloorSnapshot;
pub use types::*;
pub use view::{TableCard, TableCardStatus, TableFilter, TableStatusCounts};
