//! Station-local time handling.
//!
//! The backend stores and queries timestamps in the station's local time,
//! a fixed +3h offset from UTC. Every bucket label and every query window
//! sent to the server goes through this module.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Utc};

/// Fixed offset of the station's local time from UTC, in hours.
pub const STATION_UTC_OFFSET_HOURS: i32 = 3;

pub(crate) fn station_offset() -> FixedOffset {
    FixedOffset::east_opt(STATION_UTC_OFFSET_HOURS * 3600)
        .expect("station offset is a valid fixed offset")
}

/// Shifts a UTC instant into station-local time.
pub(crate) fn to_station_time(ts: DateTime<Utc>) -> DateTime<FixedOffset> {
    ts.with_timezone(&station_offset())
}

/// The hour bucket label (`HH:00`) for a reading, in station-local time.
pub(crate) fn hour_label(ts: DateTime<Utc>) -> String {
    format!("{:02}:00", to_station_time(ts).hour())
}

/// The day bucket label (`YYYY-MM-DD`) for a reading, in station-local time.
pub(crate) fn day_label(ts: DateTime<Utc>) -> String {
    let local = to_station_time(ts);
    format!("{:04}-{:02}-{:02}", local.year(), local.month(), local.day())
}

/// Formats the start-of-day bound of a history/stats query window.
///
/// The backend compares against naive station-local timestamps, so the
/// parameter carries no offset suffix.
pub(crate) fn window_start(date: NaiveDate) -> String {
    format!("{}T00:00:00", date.format("%Y-%m-%d"))
}

/// Formats the end-of-day bound of a history/stats query window (inclusive).
pub(crate) fn window_end(date: NaiveDate) -> String {
    format!("{}T23:59:59", date.format("%Y-%m-%d"))
}

/// Today's calendar date in station-local time.
pub fn station_today() -> NaiveDate {
    to_station_time(Utc::now()).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn hour_label_applies_station_offset() {
        // 22:30 UTC is 01:30 the next day at +3h.
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 22, 30, 0).unwrap();
        assert_eq!(hour_label(ts), "01:00");
        assert_eq!(day_label(ts), "2024-05-02");
    }

    #[test]
    fn hour_label_is_zero_padded() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 4, 0, 0).unwrap();
        assert_eq!(hour_label(ts), "07:00");
    }

    #[test]
    fn window_bounds_cover_the_whole_day() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(window_start(date), "2024-05-01T00:00:00");
        assert_eq!(window_end(date), "2024-05-01T23:59:59");
    }
}
