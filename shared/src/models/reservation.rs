//! Reservation Model

use serde::{Deserialize, Serialize};

/// Reservation entity (a guest waiting to be seated)
///
/// `requested_table` is free-form; it is never checked against the
/// configured table settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Caller-supplied id (see [`crate::util::reservation_id`])
    pub id: String,
    /// Guest display name
    pub princess: String,
    pub requested_table: String,
    /// Budget in currency units
    pub budget: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Reservation {
    pub fn new(
        id: impl Into<String>,
        princess: impl Into<String>,
        requested_table: impl Into<String>,
        budget: u64,
    ) -> Self {
        Self {
            id: id.into(),
            princess: princess.into(),
            requested_table: requested_table.into(),
            budget,
            help: None,
            note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_json_shape() {
        let r = Reservation {
            note: Some("birthday".to_string()),
            ..Reservation::new("r1", "Airi", "T1", 5000)
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["requestedTable"], "T1");
        assert_eq!(json["note"], "birthday");
        assert!(json.get("help").is_none());

        let back: Reservation = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
