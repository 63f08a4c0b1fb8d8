//! Store Model

use serde::{Deserialize, Serialize};

/// Store (tenant) record, addressed by subdomain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    /// Subdomain label, e.g. `rose` for `rose.example.com`
    pub slug: String,
    pub name: String,
}
