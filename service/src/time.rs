use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

const SECOND: u64 = 1_000;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const YEAR: u64 = 365 * DAY;

/// Largest unit first
const UNITS: &[(&str, u64)] = &[("y", YEAR), ("d", DAY), ("h", HOUR), ("m", MINUTE), ("s", SECOND)];

/// Parses a scan time such as `2024-01-01T04:00`. The scanner writes no
/// offset, so the value is taken as UTC.
pub fn parse_scan_time(snap_time: &str) -> Result<DateTime<Utc>> {
    let full = format!("{snap_time}:00");
    let naive = NaiveDateTime::parse_from_str(&full, "%Y-%m-%dT%H:%M:%S")
        .with_context(|| format!("Invalid scan time {snap_time:?}"))?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// Formats milliseconds using only the largest whole unit, e.g. `3h`, `2d`,
/// `45m`. Negative values keep their sign.
pub fn format_compact(millis: i64) -> String {
    let sign = if millis < 0 { "-" } else { "" };
    let magnitude = millis.unsigned_abs();
    for (suffix, size) in UNITS {
        if magnitude >= *size {
            return format!("{sign}{}{suffix}", magnitude / size);
        }
    }
    format!("{sign}{magnitude}ms")
}

/// `"4h ago"` for a scan four hours before `now`.
pub fn format_relative(snap_time: &str, now: DateTime<Utc>) -> Result<String> {
    let scanned_at = parse_scan_time(snap_time)?;
    let delta = now.signed_duration_since(scanned_at).num_milliseconds();
    Ok(format!("{} ago", format_compact(delta)))
}
