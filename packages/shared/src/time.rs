//! Timestamp helpers for the remote store's wire format.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};

/// Parse a timestamp as emitted by the remote store.
///
/// Accepts RFC 3339 values with an offset and naive ISO 8601 values
/// (`2024-05-01T10:00:00` with optional fractional seconds), which are
/// taken as UTC. Returns `None` for anything else.
///
/// A browser reading the same naive value would take it as local time and
/// show its wall clock unchanged. Here it is shifted by the viewer's offset
/// when labelled, so `10:00` shows as `19:00` at UTC+09:00.
pub fn parse_wire_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Format a timestamp as a two-digit `HH:MM` clock label in the given offset.
pub fn format_clock_label(timestamp: &DateTime<Utc>, offset: &FixedOffset) -> String {
    timestamp.with_timezone(offset).format("%H:%M").to_string()
}

/// Offset of the machine's local timezone right now.
pub fn local_offset() -> FixedOffset {
    *Local::now().offset()
}
