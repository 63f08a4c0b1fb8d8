//! Core traits of the floor state machine
//!
//! - [`CommandHandler`]: validates a command against the current snapshot and
//!   produces events. Handlers never mutate state.
//! - [`EventApplier`]: applies one event to a snapshot. Appliers are pure and
//!   infallible; every check happens in the handler.

use enum_dispatch::enum_dispatch;
use shared::floor::{FloorEvent, FloorSnapshot};
use shared::models::{OccupiedTable, Reservation, Role};
use thiserror::Error;

/// Errors raised by command handlers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorError {
    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    #[error("Reservation already exists: {0}")]
    DuplicateReservation(String),

    #[error("Table is already occupied: {0}")]
    TableOccupied(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Metadata copied from the command envelope
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    pub operator_email: String,
    pub role: Role,
    pub timestamp: i64,
}

/// Read-only view of the floor handed to a command handler
///
/// Sequence numbers allocated here only become visible once the manager
/// applies the produced events.
pub struct CommandContext<'a> {
    snapshot: &'a FloorSnapshot,
    sequence: u64,
}

impl<'a> CommandContext<'a> {
    pub fn new(snapshot: &'a FloorSnapshot) -> Self {
        Self {
            snapshot,
            sequence: snapshot.last_sequence,
        }
    }

    /// Allocate the next event sequence number
    pub fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    pub fn snapshot(&self) -> &FloorSnapshot {
        self.snapshot
    }

    pub fn find_reservation(&self, reservation_id: &str) -> Option<&'a Reservation> {
        self.snapshot.find_reservation(reservation_id)
    }

    pub fn find_table(&self, table_id: &str) -> Option<&'a OccupiedTable> {
        self.snapshot.find_table(table_id)
    }

    /// Reservations and occupied tables share one id space
    pub fn id_in_use(&self, id: &str) -> bool {
        self.snapshot.find_reservation(id).is_some() || self.snapshot.find_table(id).is_some()
    }

    /// Fails with `TableOccupied` if someone is already seated at `table_number`
    pub fn ensure_table_free(&self, table_number: &str) -> Result<(), FloorError> {
        match self.snapshot.table_at(table_number) {
            Some(existing) => Err(FloorError::TableOccupied(format!(
                "Table {} is already occupied (guest: {}, id: {})",
                table_number, existing.princess, existing.id
            ))),
            None => Ok(()),
        }
    }

    pub fn has_table_setting(&self, table_number: &str) -> bool {
        self.snapshot.table_settings.contains(table_number)
    }
}

/// Command handler
#[enum_dispatch]
pub trait CommandHandler {
    /// Validate and produce the events for this command.
    ///
    /// An empty vector means the command is a no-op (e.g. deleting an id
    /// that is not present).
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError>;
}

/// Event applier
#[enum_dispatch]
pub trait EventApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent);
}
