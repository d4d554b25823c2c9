//! Numeric-string and boolean validation

use vela_core::diagnostic::{AttributePath, Diagnostic};
use vela_core::resource::Value;

/// String that parses as a base-10 i64 within the inclusive bounds.
///
/// A rule constructed with min > max can never be satisfied; it checks
/// nothing rather than failing every value.
pub(super) fn check_int64_string_between(
    path: &AttributePath,
    value: &str,
    min: i64,
    max: i64,
) -> Option<Diagnostic> {
    if min > max {
        return None;
    }

    let Ok(parsed) = value.parse::<i64>() else {
        return Some(Diagnostic::attribute_error(
            path.clone(),
            "Invalid Integer String",
            format!("\"{}\" cannot be parsed as an integer", value),
        ));
    };

    if (min..=max).contains(&parsed) {
        return None;
    }
    Some(Diagnostic::attribute_error(
        path.clone(),
        "Value Out Of Range",
        format!("{} is not in the range {} through {}", parsed, min, max),
    ))
}

/// Boolean value equal to the expected one
pub(super) fn check_bool_equals(
    path: &AttributePath,
    value: &Value,
    expected: bool,
) -> Option<Diagnostic> {
    match value {
        Value::Bool(b) if *b == expected => None,
        Value::Bool(b) => Some(Diagnostic::attribute_error(
            path.clone(),
            "Invalid Value",
            format!("value must be {}, got {}", expected, b),
        )),
        other => Some(Diagnostic::attribute_error(
            path.clone(),
            "Invalid Type",
            format!("expected bool, got {}", other.type_name()),
        )),
    }
}
