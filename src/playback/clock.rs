use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Shift from log time to displayed local time.
pub const DEFAULT_UTC_OFFSET: Duration = Duration::hours(1);

const UNKNOWN_CLOCK: &str = "-- H -- M -- S";

/// Parse a `DDMMYY HHMMSS` log timestamp. Two-digit years are always 20YY.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let (date, time) = raw.trim().split_once(' ')?;
    if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let day: u32 = date[0..2].parse().ok()?;
    let month: u32 = date[2..4].parse().ok()?;
    let year: i32 = 2000 + date[4..6].parse::<i32>().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::parse_from_str(time, "%H%M%S").ok()?;
    Some(date.and_time(time))
}

/// `HH H MM M SS S`, or dashes when the time is unknown.
pub fn format_clock(time: Option<&NaiveDateTime>) -> String {
    match time {
        Some(t) => format!("{:02} H {:02} M {:02} S", t.hour(), t.minute(), t.second()),
        None => UNKNOWN_CLOCK.to_string(),
    }
}

/// `HH:MM:SS`, hours not wrapped at 24.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();
    format!(
        "{sign}{:02}:{:02}:{:02}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    )
}
