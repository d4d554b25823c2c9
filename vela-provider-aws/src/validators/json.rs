//! JSON document validation

use vela_core::diagnostic::{AttributePath, Diagnostic};

/// Syntactic validity only; no schema is applied
pub(super) fn check_json(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    match serde_json::from_str::<serde_json::Value>(value) {
        Ok(_) => None,
        Err(err) => Some(Diagnostic::attribute_error(
            path.clone(),
            "Invalid JSON",
            format!("value is not valid JSON: {}", err),
        )),
    }
}
