//! Data models
//!
//! Shared between floor-engine and frontend (via JSON).
//! Field names follow the frontend's camelCase where the UI reads them directly.

pub mod occupied_table;
pub mod reservation;
pub mod session;
pub mod store;

// Re-exports
pub use occupied_table::*;
pub use reservation::*;
pub use session::*;
pub use store::*;
