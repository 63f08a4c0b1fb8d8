//! Utility module
//!
//! - [`logger`]: tracing subscriber setup
//! - [`time`]: business-timezone clock helpers
//! - [`validation`]: text / table number / start time validation

pub mod logger;
pub mod time;
pub mod validation;
