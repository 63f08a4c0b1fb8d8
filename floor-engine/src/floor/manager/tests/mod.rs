use super::*;
use shared::floor::{CommandErrorCode, FloorEventType, TableCardStatus};
use shared::models::Role;

mod test_boundary;

fn create_test_manager() -> FloorManager {
    FloorManager::new(chrono_tz::Asia::Tokyo, 64)
}

fn owner() -> Session {
    Session::new("owner@example.com", "store-1", Role::Owner)
}

fn cast() -> Session {
    Session::new("cast@example.com", "store-1", Role::Cast)
}

fn no_labels() -> HashMap<String, String> {
    HashMap::new()
}

/// Manager with table settings T1..Tn already declared
fn manager_with_tables(numbers: &[&str]) -> FloorManager {
    let manager = create_test_manager();
    let session = owner();
    for number in numbers {
        manager.add_table_setting(&session, number).unwrap();
    }
    manager
}

fn airi() -> Reservation {
    Reservation::new("r1", "Airi", "T1", 5000)
}
