//! S3 URI validation

use std::sync::LazyLock;

use regex::Regex;
use vela_core::diagnostic::{AttributePath, Diagnostic};

// Bucket names are DNS-label-like: 3-63 characters of lowercase
// alphanumerics, dots and hyphens, starting and ending alphanumeric.
static S3_URI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^s3://[a-z0-9][a-z0-9.-]{1,61}[a-z0-9](/.*)?$").unwrap()
});

pub(super) fn check_s3_uri(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    if S3_URI_PATTERN.is_match(value) {
        return None;
    }
    Some(Diagnostic::attribute_error(
        path.clone(),
        "Invalid S3 URI",
        format!(
            "\"{}\" is not a valid S3 URI (expected s3://bucket or s3://bucket/key)",
            value
        ),
    ))
}
