//! Floor Event Sourcing Module
//!
//! Reservation / table-assignment state machine:
//!
//! - **manager**: `FloorManager`, the single owner of the floor state
//! - **actions**: command handlers (validate, produce events)
//! - **appliers**: event appliers (pure snapshot updates)
//! - **views**: table status filters and empty-table synthesis
//!
//! # Architecture
//!
//! ```text
//! Command → FloorManager → Action → Event → Applier → Snapshot
//!                                    ↓
//!                          Journal + Broadcast
//! ```

// traits first: enum_dispatch registers the trait before the enums use it
pub mod traits;

pub mod actions;
pub mod appliers;
pub mod manager;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use manager::{FloorManager, ManagerError, ManagerResult};
pub use traits::FloorError;

pub use shared::floor::{
    CommandError, CommandErrorCode, CommandResponse, EventPayload, FloorCommand,
    FloorCommandPayload, FloorEvent, FloorEventType, FloorSnapshot, TableCard, TableFilter,
    TableStatusCounts,
};
