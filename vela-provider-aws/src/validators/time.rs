//! Timestamp and maintenance-window validation

use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;
use vela_core::diagnostic::{AttributePath, Diagnostic};

static ONCE_A_DAY_WINDOW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1][0-9]|2[0-3]):([0-5][0-9])-([0-1][0-9]|2[0-3]):([0-5][0-9])$").unwrap()
});

static ONCE_A_WEEK_WINDOW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i)(mon|tue|wed|thu|fri|sat|sun):([0-1][0-9]|2[0-3]):([0-5][0-9])-(mon|tue|wed|thu|fri|sat|sun):([0-1][0-9]|2[0-3]):([0-5][0-9])$",
    )
    .unwrap()
});

/// RFC 3339 timestamp with a literal "Z" UTC offset.
///
/// `+00:00` is the same instant but not the required spelling; AWS APIs
/// that take these fields echo back the "Z" form.
pub(super) fn check_utc_timestamp(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    if DateTime::parse_from_rfc3339(value).is_ok() && value.ends_with('Z') {
        return None;
    }
    Some(Diagnostic::attribute_error(
        path.clone(),
        "Invalid UTC Timestamp",
        format!(
            "\"{}\" is not a valid UTC timestamp (expected RFC 3339 with a \"Z\" offset, e.g. 2026-01-02T15:04:05Z)",
            value
        ),
    ))
}

/// Daily maintenance window: `hh24:mi-hh24:mi`
pub(super) fn check_once_a_day_window(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    if ONCE_A_DAY_WINDOW_PATTERN.is_match(value) {
        return None;
    }
    Some(Diagnostic::attribute_error(
        path.clone(),
        "Invalid Maintenance Window",
        format!(
            "\"{}\" must satisfy the format of \"hh24:mi-hh24:mi\"",
            value
        ),
    ))
}

/// Weekly maintenance window: `ddd:hh24:mi-ddd:hh24:mi`
pub(super) fn check_once_a_week_window(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    if ONCE_A_WEEK_WINDOW_PATTERN.is_match(value) {
        return None;
    }
    Some(Diagnostic::attribute_error(
        path.clone(),
        "Invalid Maintenance Window",
        format!(
            "\"{}\" must satisfy the format of \"ddd:hh24:mi-ddd:hh24:mi\"",
            value
        ),
    ))
}
