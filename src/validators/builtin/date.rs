//! Date checks
//!
//! Strings are accepted as RFC 3339, RFC 2822, `YYYY-MM-DDTHH:MM:SS[.fff]` (UTC)
//! or `YYYY-MM-DD` (midnight UTC). Numbers are epoch milliseconds.
//! `isAfter`/`isBefore` compare against an epoch-millisecond argument.

use super::parse_int;
use crate::validators::ValidationContext;
use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Epoch milliseconds of a date-like value
pub(crate) fn epoch_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) if n.is_finite() => Some(*n as i64),
        Value::String(s) => parse_date(s.trim()),
        _ => None,
    }
}

fn parse_date(s: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

pub fn is_date(ctx: &ValidationContext) -> bool {
    epoch_millis(&ctx.value).is_some()
}

/// `isAfter:timestamp`
pub fn is_after(ctx: &ValidationContext) -> bool {
    match (epoch_millis(&ctx.value), ctx.arg(0).and_then(parse_int)) {
        (Some(value), Some(ts)) => value > ts,
        _ => false,
    }
}

/// `isBefore:timestamp`
pub fn is_before(ctx: &ValidationContext) -> bool {
    match (epoch_millis(&ctx.value), ctx.arg(0).and_then(parse_int)) {
        (Some(value), Some(ts)) => value < ts,
        _ => false,
    }
}
