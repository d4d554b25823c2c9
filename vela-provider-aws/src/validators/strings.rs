//! Prefix/suffix exclusion rules
//!
//! Matching is case-sensitive. Values that differ from an excluded prefix
//! only in case are allowed through.

use vela_core::diagnostic::{AttributePath, Diagnostic};

pub(super) fn check_prefix_none_of(
    path: &AttributePath,
    value: &str,
    prefixes: &[String],
) -> Option<Diagnostic> {
    prefixes.iter().find(|p| value.starts_with(p.as_str())).map(|p| {
        Diagnostic::attribute_error(
            path.clone(),
            "Invalid Value",
            format!("value must not start with \"{}\"", p),
        )
    })
}

pub(super) fn check_suffix_none_of(
    path: &AttributePath,
    value: &str,
    suffixes: &[String],
) -> Option<Diagnostic> {
    suffixes.iter().find(|s| value.ends_with(s.as_str())).map(|s| {
        Diagnostic::attribute_error(
            path.clone(),
            "Invalid Value",
            format!("value must not end with \"{}\"", s),
        )
    })
}
