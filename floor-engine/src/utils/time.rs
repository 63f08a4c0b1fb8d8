//! Time helpers — business timezone

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::validation::START_TIME_FORMAT;

/// Wall-clock start time (`HH:MM`) of `now` in the business timezone
pub fn start_time_at(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz).format(START_TIME_FORMAT).to_string()
}

/// Current start time in the business timezone
pub fn current_start_time(tz: Tz) -> String {
    start_time_at(Utc::now(), tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_start_time_in_business_timezone() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 30, 0).unwrap();
        assert_eq!(start_time_at(now, chrono_tz::Asia::Tokyo), "21:30");
        assert_eq!(start_time_at(now, chrono_tz::UTC), "12:30");
    }
}
