//! Service principal validation

use std::sync::LazyLock;

use regex::Regex;
use vela_core::diagnostic::{AttributePath, Diagnostic};

use crate::partition;

static HOSTNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z0-9-]+\.)+[a-z0-9.-]+$").unwrap());

/// A service principal is the dotted hostname a service assumes roles
/// under (e.g., `apprunner.amazonaws.com`). ARNs and bare account IDs are
/// principals of a different kind and are rejected outright.
pub(super) fn check_service_principal(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    let reason = service_principal_violation(value);
    reason.map(|reason| {
        Diagnostic::attribute_error(
            path.clone(),
            "Invalid Service Principal",
            format!("\"{}\" is not a valid service principal: {}", value, reason),
        )
    })
}

fn service_principal_violation(value: &str) -> Option<String> {
    if value.starts_with("arn:") {
        return Some("ARNs are not service principals".to_string());
    }
    if value.len() == 12 && value.bytes().all(|b| b.is_ascii_digit()) {
        return Some("account IDs are not service principals".to_string());
    }
    if !HOSTNAME_PATTERN.is_match(value) {
        return Some("expected a dotted service hostname".to_string());
    }
    if !partition::service_principal_suffixes().any(|suffix| value.ends_with(&suffix)) {
        return Some(format!(
            "hostname must end with one of: {}",
            partition::service_principal_suffixes()
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    None
}
