//! Table status view deriver
//!
//! Pure functions from (occupied tables, table settings, filter, first-visit
//! labels) to the cards rendered on the table status screen. Nothing here
//! writes back into state; empty-table placeholders exist only in the output.
//!
//! | filter     | result                                                   |
//! |------------|----------------------------------------------------------|
//! | `occupied` | every occupied table, stored order                       |
//! | `first`    | occupied tables whose table number has a first-visit label |
//! | `used`     | always empty                                             |
//! | `empty`    | one placeholder per unoccupied table setting             |
//! | `all`      | `occupied` followed by `empty`                           |

use std::collections::{HashMap, HashSet};

use indexmap::IndexSet;
use shared::floor::{TableCard, TableFilter, TableStatusCounts};
use shared::models::OccupiedTable;

/// Derive the cards to render for `filter`
///
/// `first_visit_labels` maps table number → label; only key presence matters.
pub fn visible_tables(
    tables: &[OccupiedTable],
    table_settings: &IndexSet<String>,
    filter: TableFilter,
    first_visit_labels: &HashMap<String, String>,
) -> Vec<TableCard> {
    match filter {
        TableFilter::Occupied => tables.iter().map(TableCard::from).collect(),
        TableFilter::First => tables
            .iter()
            .filter(|t| first_visit_labels.contains_key(&t.table_number))
            .map(TableCard::from)
            .collect(),
        // No history of finished seatings is kept
        TableFilter::Used => Vec::new(),
        TableFilter::Empty => empty_table_cards(tables, table_settings),
        TableFilter::All => {
            let mut cards: Vec<TableCard> = tables.iter().map(TableCard::from).collect();
            cards.extend(empty_table_cards(tables, table_settings));
            cards
        }
    }
}

/// Placeholders for every configured table nobody is seated at
///
/// Order follows the table settings. Each placeholder gets a fresh id so
/// repeated renders never collide on keys.
pub fn empty_table_cards(
    tables: &[OccupiedTable],
    table_settings: &IndexSet<String>,
) -> Vec<TableCard> {
    let occupied: HashSet<&str> = tables.iter().map(|t| t.table_number.as_str()).collect();
    table_settings
        .iter()
        .filter(|number| !occupied.contains(number.as_str()))
        .map(|number| TableCard::empty(placeholder_id(), number.clone()))
        .collect()
}

/// Card counts for every filter tab, without building the cards
pub fn status_counts(
    tables: &[OccupiedTable],
    table_settings: &IndexSet<String>,
    first_visit_labels: &HashMap<String, String>,
) -> TableStatusCounts {
    let occupied: HashSet<&str> = tables.iter().map(|t| t.table_number.as_str()).collect();
    let empty = table_settings
        .iter()
        .filter(|number| !occupied.contains(number.as_str()))
        .count();
    let first = tables
        .iter()
        .filter(|t| first_visit_labels.contains_key(&t.table_number))
        .count();

    TableStatusCounts {
        all: tables.len() + empty,
        occupied: tables.len(),
        empty,
        first,
        used: 0,
    }
}

fn placeholder_id() -> String {
    format!("empty-{}", uuid::Uuid::new_v4())
}
