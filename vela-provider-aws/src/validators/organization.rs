//! AWS Organizations identifier validation

use std::sync::LazyLock;

use regex::Regex;
use vela_core::diagnostic::{AttributePath, Diagnostic};

static OU_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ou-[0-9a-z]{4,32}-[0-9a-z]{8,32}$").unwrap());

static ROOT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^r-[0-9a-z]{4,32}$").unwrap());

/// Organizational unit ID: `ou-` prefix, the root fragment, then an
/// 8-32 character alphanumeric suffix
pub(super) fn check_ou_id(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    if OU_ID_PATTERN.is_match(value) {
        return None;
    }
    Some(Diagnostic::attribute_error(
        path.clone(),
        "Invalid Organizational Unit ID",
        format!(
            "\"{}\" is not a valid organizational unit ID (expected the form ou-examplerootid-exampleouid)",
            value
        ),
    ))
}

/// Organization root ID: `r-` prefix and a 4-32 character alphanumeric body
pub(super) fn check_root_id(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    if ROOT_ID_PATTERN.is_match(value) {
        return None;
    }
    Some(Diagnostic::attribute_error(
        path.clone(),
        "Invalid Organization Root ID",
        format!(
            "\"{}\" is not a valid organization root ID (expected the form r-examplerootid)",
            value
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> AttributePath {
        AttributePath::root("attr")
    }

    #[test]
    fn test_check_ou_id() {
        assert_eq!(check_ou_id(&path(), "ou-abcd-12345678"), None);
        assert_eq!(check_ou_id(&path(), "ou-abcdefgh-1234567890abcdef"), None);

        for bad in [
            "ou-abcd-1234567",      // suffix too short
            "ou-abc-12345678",      // root fragment too short
            "r-abcd",               // wrong prefix
            "ou-ABCD-12345678",     // uppercase
            "not-an-ou",
        ] {
            assert!(check_ou_id(&path(), bad).is_some(), "{}", bad);
        }
    }

    #[test]
    fn test_check_root_id() {
        assert_eq!(check_root_id(&path(), "r-abcd"), None);
        assert_eq!(check_root_id(&path(), "r-1234567890abcdef"), None);

        for bad in ["r-abc", "ou-abcd-12345678", "r-ABCD", "root-abcd"] {
            assert!(check_root_id(&path(), bad).is_some(), "{}", bad);
        }
    }
}
