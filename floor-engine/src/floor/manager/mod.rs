//! FloorManager - the reservation / table state store
//!
//! This module handles:
//! - Command authorization and validation
//! - Event generation with sequence numbers
//! - Snapshot updates through the event appliers
//! - An in-memory event journal for reconnection sync
//! - Event broadcasting
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Take the write lock
//!     ├─ 2. Idempotency check (command_id)
//!     ├─ 3. Capability check (can_manage_tables)
//!     ├─ 4. Convert payload to action and execute against the snapshot
//!     ├─ 5. Apply events to the snapshot via EventApplier
//!     ├─ 6. Append events to the journal, mark command processed
//!     ├─ 7. Compact the journal past its capacity
//!     ├─ 8. Release the lock
//!     ├─ 9. Broadcast event(s)
//!     └─ 10. Return response
//! ```
//!
//! Steps 2–6 run under one write lock, so readers never observe a reservation
//! and the table it was assigned to at the same time. A failing command leaves
//! the snapshot untouched.

mod error;
pub use error::*;

use super::actions::CommandAction;
use super::appliers::apply_events;
use super::traits::{CommandContext, CommandHandler, CommandMetadata};
use super::views;
use crate::core::Config;
use crate::utils::time::current_start_time;
use chrono_tz::Tz;
use indexmap::IndexSet;
use parking_lot::RwLock;
use shared::floor::{
    CommandResponse, EventPayload, FloorCommand, FloorCommandPayload, FloorEvent, FloorSnapshot,
    SyncRequest, SyncResponse, TableCard, TableFilter, TableStatusCounts,
};
use shared::models::{OccupiedTable, Reservation, Session};
use std::collections::HashMap;
use tokio::sync::broadcast;

/// Event broadcast channel capacity when none is configured
const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Journal / processed-command bound when none is configured
const DEFAULT_JOURNAL_CAPACITY: usize = 10_000;

struct FloorState {
    /// Snapshot the journal starts from
    base: FloorSnapshot,
    snapshot: FloorSnapshot,
    journal: Vec<FloorEvent>,
    /// Oldest first
    processed_commands: IndexSet<String>,
}

impl FloorState {
    /// Fold the oldest events into `base` and forget the oldest command ids
    /// once either grows past `capacity`
    fn compact(&mut self, capacity: usize) {
        if self.journal.len() > capacity {
            let excess = self.journal.len() - capacity;
            let folded: Vec<FloorEvent> = self.journal.drain(..excess).collect();
            apply_events(&mut self.base, &folded);
            tracing::debug!(
                folded = excess,
                base_sequence = self.base.last_sequence,
                "Journal compacted"
            );
        }
        if self.processed_commands.len() > capacity {
            let excess = self.processed_commands.len() - capacity;
            self.processed_commands.drain(..excess);
        }
    }
}

/// FloorManager - single owner of reservations, table settings and
/// occupied tables
///
/// The `epoch` field is a unique identifier generated on construction.
/// Clients use it to detect a reset and trigger full resync.
pub struct FloorManager {
    state: RwLock<FloorState>,
    event_tx: broadcast::Sender<FloorEvent>,
    epoch: String,
    /// 营业时区
    tz: Tz,
    journal_capacity: usize,
}

impl std::fmt::Debug for FloorManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloorManager")
            .field("event_tx", &"<broadcast::Sender>")
            .field("epoch", &self.epoch)
            .field("tz", &self.tz)
            .field("journal_capacity", &self.journal_capacity)
            .finish()
    }
}

impl Default for FloorManager {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Tokyo, DEFAULT_EVENT_CHANNEL_CAPACITY)
    }
}

impl FloorManager {
    /// Create an empty floor
    pub fn new(tz: Tz, event_channel_capacity: usize) -> Self {
        Self::from_snapshot(FloorSnapshot::new(), tz, event_channel_capacity)
    }

    /// Create an empty floor from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.timezone, config.event_channel_capacity)
            .with_journal_capacity(config.journal_capacity)
    }

    /// Resume from a previously taken snapshot
    ///
    /// Sequence numbers continue from `snapshot.last_sequence`.
    pub fn from_snapshot(
        mut snapshot: FloorSnapshot,
        tz: Tz,
        event_channel_capacity: usize,
    ) -> Self {
        snapshot.update_checksum();
        let (event_tx, _) = broadcast::channel(event_channel_capacity.max(1));
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(
            epoch = %epoch,
            reservations = snapshot.reservations.len(),
            table_settings = snapshot.table_settings.len(),
            tables = snapshot.tables.len(),
            last_sequence = snapshot.last_sequence,
            "FloorManager started with new epoch"
        );
        Self {
            state: RwLock::new(FloorState {
                base: snapshot.clone(),
                snapshot,
                journal: Vec::new(),
                processed_commands: IndexSet::new(),
            }),
            event_tx,
            epoch,
            tz,
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
        }
    }

    /// Bound the in-memory journal and the idempotency window
    pub fn with_journal_capacity(mut self, capacity: usize) -> Self {
        self.journal_capacity = capacity.max(1);
        self
    }

    /// Get the manager epoch (unique instance ID)
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Subscribe to event broadcasts
    pub fn subscribe(&self) -> broadcast::Receiver<FloorEvent> {
        self.event_tx.subscribe()
    }

    // ========================================================================
    // Command execution
    // ========================================================================

    /// Execute a command and return the response
    pub fn execute_command(&self, cmd: FloorCommand) -> CommandResponse {
        let (response, _) = self.execute_command_with_events(cmd);
        response
    }

    /// Execute a command and return both the response and generated events
    pub fn execute_command_with_events(
        &self,
        cmd: FloorCommand,
    ) -> (CommandResponse, Vec<FloorEvent>) {
        let command_id = cmd.command_id.clone();
        match self.process_command(cmd) {
            Ok((response, events)) => {
                self.broadcast(&events);
                (response, events)
            }
            Err(err) => (CommandResponse::error(command_id, err.into()), vec![]),
        }
    }

    /// Process command and return response with events
    ///
    /// Holds the write lock for the whole transition; broadcasting happens
    /// after the lock is released.
    fn process_command(
        &self,
        cmd: FloorCommand,
    ) -> ManagerResult<(CommandResponse, Vec<FloorEvent>)> {
        tracing::debug!(
            command_id = %cmd.command_id,
            command = cmd.payload.name(),
            operator = %cmd.operator_email,
            "Processing command"
        );

        let mut state = self.state.write();

        // 1. Idempotency check
        if state.processed_commands.contains(&cmd.command_id) {
            tracing::warn!(command_id = %cmd.command_id, "Duplicate command");
            return Ok((CommandResponse::duplicate(cmd.command_id), vec![]));
        }

        // 2. Capability check
        if cmd.payload.requires_table_management() && !cmd.role.can_manage_tables() {
            tracing::warn!(
                command_id = %cmd.command_id,
                command = cmd.payload.name(),
                role = %cmd.role,
                "Command rejected: role cannot manage tables"
            );
            return Err(ManagerError::PermissionDenied(format!(
                "role {} cannot run {}",
                cmd.role,
                cmd.payload.name()
            )));
        }

        // 3. Convert to action and execute
        let metadata = CommandMetadata {
            command_id: cmd.command_id.clone(),
            operator_email: cmd.operator_email.clone(),
            role: cmd.role,
            timestamp: cmd.timestamp,
        };
        let action = CommandAction::from(&cmd.payload);
        let events = {
            let mut ctx = CommandContext::new(&state.snapshot);
            action.execute(&mut ctx, &metadata).map_err(|e| {
                tracing::warn!(
                    command_id = %cmd.command_id,
                    command = cmd.payload.name(),
                    error = %e,
                    "Command rejected"
                );
                ManagerError::from(e)
            })?
        };

        // 4. Apply and journal
        apply_events(&mut state.snapshot, &events);
        state.journal.extend(events.iter().cloned());
        state.processed_commands.insert(cmd.command_id.clone());
        state.compact(self.journal_capacity);

        let table_id = events.iter().find_map(|e| match &e.payload {
            EventPayload::TableOpened { table } | EventPayload::TableAssigned { table, .. } => {
                Some(table.id.clone())
            }
            _ => None,
        });

        tracing::debug!(
            command_id = %cmd.command_id,
            events = events.len(),
            last_sequence = state.snapshot.last_sequence,
            "Command processed"
        );

        Ok((CommandResponse::success(cmd.command_id, table_id), events))
    }

    fn broadcast(&self, events: &[FloorEvent]) {
        for event in events {
            if self.event_tx.send(event.clone()).is_err() {
                tracing::debug!("Event broadcast skipped: no active receivers");
                break;
            }
        }
    }

    /// Build and run a command on behalf of `session`, returning the
    /// occupied table id for seating commands
    fn dispatch(
        &self,
        session: &Session,
        payload: FloorCommandPayload,
    ) -> ManagerResult<Option<String>> {
        let cmd = FloorCommand::new(session, payload);
        let (response, events) = self.process_command(cmd)?;
        self.broadcast(&events);
        Ok(response.table_id)
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Append a reservation (insertion order preserved)
    pub fn add_reservation(
        &self,
        session: &Session,
        reservation: Reservation,
    ) -> ManagerResult<()> {
        self.dispatch(session, FloorCommandPayload::AddReservation { reservation })
            .map(|_| ())
    }

    /// Remove a reservation; unknown ids are a no-op
    pub fn delete_reservation(
        &self,
        session: &Session,
        reservation_id: &str,
    ) -> ManagerResult<()> {
        self.dispatch(
            session,
            FloorCommandPayload::DeleteReservation {
                reservation_id: reservation_id.to_string(),
            },
        )
        .map(|_| ())
    }

    /// Declare a table number; existing numbers are a no-op
    pub fn add_table_setting(&self, session: &Session, table_number: &str) -> ManagerResult<()> {
        self.dispatch(
            session,
            FloorCommandPayload::AddTableSetting {
                table_number: table_number.to_string(),
            },
        )
        .map(|_| ())
    }

    /// Remove a table number; unknown numbers are a no-op
    pub fn remove_table_setting(
        &self,
        session: &Session,
        table_number: &str,
    ) -> ManagerResult<()> {
        self.dispatch(
            session,
            FloorCommandPayload::RemoveTableSetting {
                table_number: table_number.to_string(),
            },
        )
        .map(|_| ())
    }

    /// Clear an occupied table; unknown ids are a no-op
    pub fn delete_table(&self, session: &Session, table_id: &str) -> ManagerResult<()> {
        self.dispatch(
            session,
            FloorCommandPayload::DeleteTable {
                table_id: table_id.to_string(),
            },
        )
        .map(|_| ())
    }

    /// Seat a reservation at `table_number`, returning the occupied table id
    /// (equal to the reservation id)
    pub fn assign_table(
        &self,
        session: &Session,
        reservation_id: &str,
        table_number: &str,
        time: &str,
    ) -> ManagerResult<String> {
        self.dispatch(
            session,
            FloorCommandPayload::AssignTable {
                reservation_id: reservation_id.to_string(),
                table_number: table_number.to_string(),
                time: time.to_string(),
            },
        )?
        .ok_or_else(|| ManagerError::Internal("AssignTable produced no table".to_string()))
    }

    /// Seat a walk-in guest without a reservation
    ///
    /// `time` defaults to the current wall-clock time in the business timezone.
    pub fn open_table(
        &self,
        session: &Session,
        table_number: &str,
        princess: &str,
        budget: u64,
        time: Option<&str>,
    ) -> ManagerResult<String> {
        let time = time
            .map(str::to_string)
            .unwrap_or_else(|| self.current_start_time());
        self.dispatch(
            session,
            FloorCommandPayload::OpenTable {
                table_id: uuid::Uuid::new_v4().to_string(),
                table_number: table_number.to_string(),
                princess: princess.to_string(),
                budget,
                time,
            },
        )?
        .ok_or_else(|| ManagerError::Internal("OpenTable produced no table".to_string()))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Read-only copy of the current state
    pub fn snapshot(&self) -> FloorSnapshot {
        self.state.read().snapshot.clone()
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.state.read().snapshot.reservations.clone()
    }

    pub fn table_settings(&self) -> IndexSet<String> {
        self.state.read().snapshot.table_settings.clone()
    }

    pub fn tables(&self) -> Vec<OccupiedTable> {
        self.state.read().snapshot.tables.clone()
    }

    pub fn last_sequence(&self) -> u64 {
        self.state.read().snapshot.last_sequence
    }

    /// Cards for the table status screen
    pub fn visible_tables(
        &self,
        filter: TableFilter,
        first_visit_labels: &HashMap<String, String>,
    ) -> Vec<TableCard> {
        let state = self.state.read();
        views::visible_tables(
            &state.snapshot.tables,
            &state.snapshot.table_settings,
            filter,
            first_visit_labels,
        )
    }

    /// Badge counts for every filter tab
    pub fn status_counts(
        &self,
        first_visit_labels: &HashMap<String, String>,
    ) -> TableStatusCounts {
        let state = self.state.read();
        views::status_counts(
            &state.snapshot.tables,
            &state.snapshot.table_settings,
            first_visit_labels,
        )
    }

    /// Current wall-clock start time (`HH:MM`) in the business timezone
    pub fn current_start_time(&self) -> String {
        current_start_time(self.tz)
    }

    // ========================================================================
    // Sync
    // ========================================================================

    /// Journal events with a sequence greater than `since_sequence`
    ///
    /// Events folded away by compaction are not returned; use [`Self::sync`]
    /// to learn whether a full resync is needed.
    pub fn events_since(&self, since_sequence: u64) -> Vec<FloorEvent> {
        self.state
            .read()
            .journal
            .iter()
            .filter(|e| e.sequence > since_sequence)
            .cloned()
            .collect()
    }

    /// Reconnection sync
    pub fn sync(&self, request: &SyncRequest) -> SyncResponse {
        let state = self.state.read();
        if request.since_sequence < state.base.last_sequence {
            tracing::info!(
                since = request.since_sequence,
                journal_start = state.base.last_sequence,
                "Sync gap exceeds journal, sending full state"
            );
            return SyncResponse::full_sync(state.snapshot.clone(), self.epoch.clone());
        }
        let events = state
            .journal
            .iter()
            .filter(|e| e.sequence > request.since_sequence)
            .cloned()
            .collect();
        SyncResponse::incremental(events, state.snapshot.last_sequence, self.epoch.clone())
    }

    /// Replay the journal onto the starting snapshot
    ///
    /// The result equals [`FloorManager::snapshot`] unless the reducer drifted.
    pub fn rebuild_from_journal(&self) -> FloorSnapshot {
        let state = self.state.read();
        let mut snapshot = state.base.clone();
        apply_events(&mut snapshot, &state.journal);
        snapshot
    }
}

#[cfg(test)]
mod tests;
