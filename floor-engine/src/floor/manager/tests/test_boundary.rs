use super::*;
use std::collections::HashSet;

#[test]
fn test_delete_missing_table_is_noop() {
    let manager = manager_with_tables(&["T1"]);
    let session = owner();
    manager.add_reservation(&session, airi()).unwrap();
    manager.assign_table(&session, "r1", "T1", "21:00").unwrap();
    let before = manager.snapshot();

    manager.delete_table(&session, "does-not-exist").unwrap();

    assert_eq!(manager.snapshot(), before);
    assert_eq!(manager.last_sequence(), before.last_sequence);
}

#[test]
fn test_delete_missing_reservation_is_noop() {
    let manager = create_test_manager();
    let session = owner();
    manager.add_reservation(&session, airi()).unwrap();

    manager.delete_reservation(&session, "r404").unwrap();

    assert_eq!(manager.reservations(), vec![airi()]);
    assert_eq!(manager.last_sequence(), 1);
}

#[test]
fn test_delete_table_twice() {
    let manager = manager_with_tables(&["T1"]);
    let session = owner();
    manager.add_reservation(&session, airi()).unwrap();
    manager.assign_table(&session, "r1", "T1", "21:00").unwrap();

    manager.delete_table(&session, "r1").unwrap();
    let after_first = manager.snapshot();
    manager.delete_table(&session, "r1").unwrap();

    assert!(after_first.tables.is_empty());
    assert_eq!(manager.snapshot(), after_first);
}

#[test]
fn test_used_filter_always_empty() {
    let manager = manager_with_tables(&["T1", "T2"]);
    let session = owner();
    manager.add_reservation(&session, airi()).unwrap();
    manager.assign_table(&session, "r1", "T1", "21:00").unwrap();
    manager.delete_table(&session, "r1").unwrap();
    manager.open_table(&session, "T2", "Rena", 3000, Some("22:15")).unwrap();

    let labels: HashMap<String, String> = [("T2".to_string(), "初回".to_string())].into();
    assert!(manager.visible_tables(TableFilter::Used, &labels).is_empty());
    assert_eq!(manager.status_counts(&labels).used, 0);
}

#[test]
fn test_double_booking_rejected() {
    let manager = manager_with_tables(&["T1"]);
    let session = owner();
    manager.add_reservation(&session, airi()).unwrap();
    manager
        .add_reservation(&session, Reservation::new("r2", "Rena", "T1", 8000))
        .unwrap();
    manager.assign_table(&session, "r1", "T1", "21:00").unwrap();
    let before = manager.snapshot();

    let err = manager.assign_table(&session, "r2", "T1", "21:30").unwrap_err();
    assert!(matches!(err, ManagerError::TableOccupied(_)));
    assert_eq!(manager.snapshot(), before);
    // r2 is still waiting
    assert!(manager.snapshot().find_reservation("r2").is_some());

    let err = manager.open_table(&session, "T1", "Yuna", 0, Some("21:45")).unwrap_err();
    assert!(matches!(err, ManagerError::TableOccupied(_)));
}

#[test]
fn test_assign_unknown_reservation() {
    let manager = manager_with_tables(&["T1"]);
    let session = owner();

    let err = manager.assign_table(&session, "ghost", "T1", "21:00").unwrap_err();

    assert_eq!(err, ManagerError::ReservationNotFound("ghost".to_string()));
    assert!(manager.tables().is_empty());
    assert_eq!(manager.last_sequence(), 1);
}

#[test]
fn test_assign_twice_fails_second_time() {
    let manager = manager_with_tables(&["T1", "T2"]);
    let session = owner();
    manager.add_reservation(&session, airi()).unwrap();
    manager.assign_table(&session, "r1", "T1", "21:00").unwrap();

    let err = manager.assign_table(&session, "r1", "T2", "21:00").unwrap_err();
    assert!(matches!(err, ManagerError::ReservationNotFound(_)));
    assert_eq!(manager.tables().len(), 1);
}

#[test]
fn test_duplicate_reservation_id() {
    let manager = create_test_manager();
    let session = owner();
    manager.add_reservation(&session, airi()).unwrap();

    let err = manager
        .add_reservation(&session, Reservation::new("r1", "Someone", "T5", 100))
        .unwrap_err();

    assert!(matches!(err, ManagerError::DuplicateReservation(_)));
    assert_eq!(manager.reservations(), vec![airi()]);
}

#[test]
fn test_invalid_input_rejected() {
    let manager = manager_with_tables(&["T1"]);
    let session = owner();

    assert!(matches!(
        manager.add_reservation(&session, Reservation::new("", "Airi", "T1", 0)),
        Err(ManagerError::InvalidInput(_))
    ));
    assert!(matches!(
        manager.add_reservation(&session, Reservation::new("r1", "   ", "T1", 0)),
        Err(ManagerError::InvalidInput(_))
    ));
    assert!(matches!(
        manager.add_table_setting(&session, "  "),
        Err(ManagerError::InvalidInput(_))
    ));

    manager.add_reservation(&session, airi()).unwrap();
    assert!(matches!(
        manager.assign_table(&session, "r1", "T1", "9pm"),
        Err(ManagerError::InvalidInput(_))
    ));
    assert!(matches!(
        manager.assign_table(&session, "r1", "", "21:00"),
        Err(ManagerError::InvalidInput(_))
    ));
    assert!(manager.tables().is_empty());
}

#[test]
fn test_failed_command_can_be_retried() {
    let manager = manager_with_tables(&["T1"]);
    let session = owner();
    let cmd = FloorCommand::new(
        &session,
        FloorCommandPayload::AssignTable {
            reservation_id: "r1".to_string(),
            table_number: "T1".to_string(),
            time: "21:00".to_string(),
        },
    );

    let first = manager.execute_command(cmd.clone());
    assert_eq!(first.error_code(), Some(&CommandErrorCode::ReservationNotFound));

    // The failed id was not recorded, so the retry runs for real
    manager.add_reservation(&session, airi()).unwrap();
    let retry = manager.execute_command(cmd);
    assert!(retry.success);
    assert_eq!(retry.table_id.as_deref(), Some("r1"));
}

#[test]
fn test_table_without_setting_can_be_seated() {
    let manager = create_test_manager();
    let session = owner();
    manager
        .add_reservation(&session, Reservation::new("r1", "Airi", "VIP", 20000))
        .unwrap();

    manager.assign_table(&session, "r1", "VIP", "23:00").unwrap();

    let occupied = manager.visible_tables(TableFilter::Occupied, &no_labels());
    assert_eq!(occupied.len(), 1);
    assert_eq!(occupied[0].table_number, "VIP");
    assert!(manager.visible_tables(TableFilter::Empty, &no_labels()).is_empty());
}

#[test]
fn test_removing_occupied_table_setting() {
    let manager = manager_with_tables(&["T1", "T2"]);
    let session = owner();
    manager.add_reservation(&session, airi()).unwrap();
    manager.assign_table(&session, "r1", "T1", "21:00").unwrap();

    manager.remove_table_setting(&session, "T1").unwrap();
    manager.remove_table_setting(&session, "T9").unwrap();

    // The seated guest stays; only the setting is gone
    assert_eq!(manager.tables().len(), 1);
    let empty = manager.visible_tables(TableFilter::Empty, &no_labels());
    let numbers: Vec<&str> = empty.iter().map(|c| c.table_number.as_str()).collect();
    assert_eq!(numbers, vec!["T2"]);
}

#[test]
fn test_seated_id_cannot_be_reserved_again() {
    let manager = manager_with_tables(&["T1", "T2"]);
    let session = owner();
    manager.add_reservation(&session, airi()).unwrap();
    manager.assign_table(&session, "r1", "T1", "21:00").unwrap();

    let err = manager
        .add_reservation(&session, Reservation::new("r1", "Airi", "T2", 5000))
        .unwrap_err();
    assert_eq!(err, ManagerError::DuplicateReservation("r1".to_string()));
    assert!(manager.reservations().is_empty());

    // Clearing r1 clears exactly one guest
    manager.delete_table(&session, "r1").unwrap();
    assert!(manager.tables().is_empty());
    manager.open_table(&session, "T2", "Rena", 0, Some("21:30")).unwrap();
    manager.delete_table(&session, "r1").unwrap();
    assert_eq!(manager.tables().len(), 1);
}

#[test]
fn test_open_table_with_pending_reservation_id() {
    let manager = manager_with_tables(&["T1", "T2"]);
    let session = owner();
    manager.add_reservation(&session, airi()).unwrap();

    let response = manager.execute_command(FloorCommand::new(
        &session,
        FloorCommandPayload::OpenTable {
            table_id: "r1".to_string(),
            table_number: "T2".to_string(),
            princess: "Rena".to_string(),
            budget: 0,
            time: "21:30".to_string(),
        },
    ));
    assert_eq!(response.error_code(), Some(&CommandErrorCode::InvalidInput));

    manager.assign_table(&session, "r1", "T1", "21:00").unwrap();
    let cards = manager.visible_tables(TableFilter::All, &no_labels());
    let ids: HashSet<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), cards.len());
}

#[test]
fn test_assign_rejects_id_already_seated() {
    // A restored snapshot that already holds r1 on both sides
    let mut snapshot = FloorSnapshot::new();
    snapshot.reservations.push(airi());
    snapshot.tables.push(OccupiedTable {
        id: "r1".to_string(),
        table_number: "T1".to_string(),
        princess: "Airi".to_string(),
        budget: 5000,
        time: "20:00".to_string(),
    });
    let manager = FloorManager::from_snapshot(snapshot, chrono_tz::Asia::Tokyo, 16);

    let err = manager.assign_table(&owner(), "r1", "T2", "21:00").unwrap_err();

    assert_eq!(err, ManagerError::DuplicateReservation("r1".to_string()));
    assert_eq!(manager.tables().len(), 1);
    assert_eq!(manager.reservations().len(), 1);
}
