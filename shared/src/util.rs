/// Current UTC timestamp (milliseconds)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a timestamp-derived reservation id, e.g. `rsv-1729300000000-3fa1`.
///
/// The random suffix keeps two reservations taken in the same millisecond apart.
pub fn reservation_id() -> String {
    use rand::Rng;
    let suffix: u16 = rand::thread_rng().r#gen();
    format!("rsv-{}-{:04x}", now_millis(), suffix)
}
