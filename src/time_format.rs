//! Countdown Formatting
//!
//! Converts the distance to a target instant into whole days, hours, minutes
//! and seconds, and translates `end` values between their stored form, the
//! "Ends at" label and the date picker.

use std::fmt;

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Offset-less forms a datetime-local input (or a hand-edited store) produces
const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// ISO-8601 forms with an offset (`Z` or `±HH[:MM]`) that RFC 3339 rejects
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// Date picker value format (local time, minute precision)
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Human-readable "Ends at" format (local time)
const LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Remaining time split into display units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown { days: 0, hours: 0, minutes: 0, seconds: 0 };

    /// Split a millisecond difference; negative differences clamp to zero.
    pub fn from_millis(diff_ms: i64) -> Self {
        let diff = diff_ms.max(0) as u64;
        Self {
            days: diff / MS_PER_DAY,
            hours: (diff / MS_PER_HOUR) % 24,
            minutes: (diff / MS_PER_MINUTE) % 60,
            seconds: (diff / MS_PER_SECOND) % 60,
        }
    }

    /// Time left from `now` until `target`
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_millis((target - now).num_milliseconds())
    }

    /// Recombine the units into milliseconds (sub-second part is lost)
    pub fn total_millis(&self) -> u64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }

    /// Days, hours, minutes, seconds, each padded to at least two digits
    pub fn padded(&self) -> [String; 4] {
        [self.days, self.hours, self.minutes, self.seconds].map(|v| format!("{:02}", v))
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Parse a stored `end` value.
///
/// Values with an offset are taken as-is; offset-less date-times are local
/// time and bare dates are UTC midnight, matching the browser's `Date`.
/// Blank or unrecognized input yields `None`.
pub fn parse_end(end: &str) -> Option<DateTime<Utc>> {
    let end = end.trim();
    if end.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(end) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(end, format).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(end, format).ok())
    {
        return resolve_local(naive, |naive| Local.from_local_datetime(naive));
    }
    let date = NaiveDate::parse_from_str(end, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Pin a wall-clock time to an instant. Times skipped by a DST change move
/// forward by an hour, as the browser's `Date` does.
fn resolve_local<Tz: TimeZone>(
    naive: NaiveDateTime,
    resolve: impl Fn(&NaiveDateTime) -> LocalResult<DateTime<Tz>>,
) -> Option<DateTime<Utc>> {
    resolve(&naive)
        .earliest()
        .or_else(|| resolve(&(naive + TimeDelta::hours(1))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Local-time label shown under a timer's name; blank when unset
pub fn end_label(end: &str) -> String {
    parse_end(end)
        .map(|dt| dt.with_timezone(&Local).format(LABEL_FORMAT).to_string())
        .unwrap_or_default()
}

/// Value to pre-fill the edit modal's datetime-local picker with
pub fn to_input_value(end: &str) -> String {
    parse_end(end)
        .map(|dt| dt.with_timezone(&Local).format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}
