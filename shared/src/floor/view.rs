//! Table status view types

use crate::models::OccupiedTable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filter tabs on the table status screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFilter {
    Occupied,
    Empty,
    /// Occupied tables whose guest is on a first visit
    First,
    Used,
    #[default]
    All,
}

impl TableFilter {
    pub const ALL: [TableFilter; 5] = [
        TableFilter::Occupied,
        TableFilter::Empty,
        TableFilter::First,
        TableFilter::Used,
        TableFilter::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TableFilter::Occupied => "occupied",
            TableFilter::Empty => "empty",
            TableFilter::First => "first",
            TableFilter::Used => "used",
            TableFilter::All => "all",
        }
    }
}

impl std::fmt::Display for TableFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown table filter: {0}")]
pub struct UnknownFilter(pub String);

impl std::str::FromStr for TableFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableFilter::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

/// Whether a card is backed by state or synthesized for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableCardStatus {
    Occupied,
    Empty,
}

/// One card on the table status screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCard {
    pub id: String,
    pub table_number: String,
    pub princess: String,
    pub budget: u64,
    pub time: String,
    pub status: TableCardStatus,
}

impl TableCard {
    /// Placeholder for a configured table nobody is seated at
    pub fn empty(id: String, table_number: impl Into<String>) -> Self {
        Self {
            id,
            table_number: table_number.into(),
            princess: String::new(),
            budget: 0,
            time: String::new(),
            status: TableCardStatus::Empty,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.status == TableCardStatus::Empty
    }
}

impl From<&OccupiedTable> for TableCard {
    fn from(table: &OccupiedTable) -> Self {
        Self {
            id: table.id.clone(),
            table_number: table.table_number.clone(),
            princess: table.princess.clone(),
            budget: table.budget,
            time: table.time.clone(),
            status: TableCardStatus::Occupied,
        }
    }
}

/// Per-filter card counts, for the filter tab badges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStatusCounts {
    pub all: usize,
    pub occupied: usize,
    pub empty: usize,
    pub first: usize,
    pub used: usize,
}

impl TableStatusCounts {
    pub fn get(&self, filter: TableFilter) -> usize {
        match filter {
            TableFilter::Occupied => self.occupied,
            TableFilter::Empty => self.empty,
            TableFilter::First => self.first,
            TableFilter::Used => self.used,
            TableFilter::All => self.all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parse_and_display() {
        for filter in TableFilter::ALL {
            assert_eq!(filter.to_string().parse::<TableFilter>().unwrap(), filter);
        }
        assert_eq!(TableFilter::default(), TableFilter::All);
        assert!("vip".parse::<TableFilter>().is_err());
    }

    #[test]
    fn test_empty_card() {
        let card = TableCard::empty("e1".to_string(), "T2");
        assert!(card.is_placeholder());
        assert_eq!(card.princess, "");
        assert_eq!(card.budget, 0);
        assert_eq!(card.time, "");
    }
}
