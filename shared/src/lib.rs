//! Shared types for the floor engine
//!
//! Domain models, floor commands / events / snapshots, and the view types
//! consumed by the table status screen.

pub mod floor;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use floor::{
    CommandError, CommandErrorCode, CommandResponse, EventPayload, FloorCommand,
    FloorCommandPayload, FloorEvent, FloorEventType, FloorSnapshot, TableCard, TableFilter,
};
