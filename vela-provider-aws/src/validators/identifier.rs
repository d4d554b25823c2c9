//! Cluster and snapshot identifier naming rules

use vela_core::diagnostic::{AttributePath, Diagnostic};

/// Full cluster identifier: lowercase letters, digits and hyphens, first
/// character a letter, no consecutive hyphens, no trailing hyphen
pub(super) fn check_cluster_identifier(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    cluster_identifier_violation(value, false)
        .map(|reason| invalid_identifier(path, "Invalid Cluster Identifier", value, reason))
}

/// Prefix variant: the trailing-hyphen rule is dropped because generated
/// characters are appended after the prefix
pub(super) fn check_cluster_identifier_prefix(
    path: &AttributePath,
    value: &str,
) -> Option<Diagnostic> {
    cluster_identifier_violation(value, true)
        .map(|reason| invalid_identifier(path, "Invalid Cluster Identifier Prefix", value, reason))
}

fn cluster_identifier_violation(value: &str, is_prefix: bool) -> Option<&'static str> {
    if !value.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
        return Some("first character must be a lowercase letter");
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Some("only lowercase alphanumeric characters and hyphens are allowed");
    }
    if value.contains("--") {
        return Some("cannot contain two consecutive hyphens");
    }
    if !is_prefix && value.ends_with('-') {
        return Some("cannot end with a hyphen");
    }
    None
}

/// Final snapshot identifier: letters of either case, digits and hyphens,
/// no consecutive hyphens, no trailing hyphen
pub(super) fn check_final_snapshot_identifier(
    path: &AttributePath,
    value: &str,
) -> Option<Diagnostic> {
    let reason = if value.is_empty()
        || !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        Some("only alphanumeric characters and hyphens are allowed")
    } else if value.contains("--") {
        Some("cannot contain two consecutive hyphens")
    } else if value.ends_with('-') {
        Some("cannot end with a hyphen")
    } else {
        None
    };
    reason.map(|reason| invalid_identifier(path, "Invalid Final Snapshot Identifier", value, reason))
}

fn invalid_identifier(
    path: &AttributePath,
    summary: &str,
    value: &str,
    reason: &str,
) -> Diagnostic {
    Diagnostic::attribute_error(path.clone(), summary, format!("\"{}\": {}", value, reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> AttributePath {
        AttributePath::root("attr")
    }

    #[test]
    fn test_check_cluster_identifier() {
        assert_eq!(check_cluster_identifier(&path(), "valid-cluster-identifier"), None);
        assert_eq!(check_cluster_identifier(&path(), "a"), None);
        assert_eq!(check_cluster_identifier(&path(), "tf-acc-test-1"), None);

        for bad in [
            "11-not-valid",         // leading digit
            "invalid--identifier",  // double hyphen
            "invalid-identifier--", // trailing hyphen
            "Invalid-Identifier",   // uppercase
            "invalid_identifier",   // underscore
            "",
        ] {
            assert!(check_cluster_identifier(&path(), bad).is_some(), "{:?}", bad);
        }
    }

    #[test]
    fn prefix_variant_allows_trailing_hyphen() {
        assert_eq!(check_cluster_identifier_prefix(&path(), "my-cluster-"), None);
        assert_eq!(check_cluster_identifier_prefix(&path(), "my-cluster"), None);

        // Other rules still apply
        assert!(check_cluster_identifier_prefix(&path(), "1-cluster").is_some());
        assert!(check_cluster_identifier_prefix(&path(), "my--cluster").is_some());
    }

    #[test]
    fn test_check_final_snapshot_identifier() {
        assert_eq!(check_final_snapshot_identifier(&path(), "Final-Snapshot-1"), None);
        assert_eq!(check_final_snapshot_identifier(&path(), "23snap"), None);

        for bad in ["snap--shot", "snapshot-", "snap_shot", ""] {
            assert!(
                check_final_snapshot_identifier(&path(), bad).is_some(),
                "{:?}",
                bad
            );
        }
    }
}
