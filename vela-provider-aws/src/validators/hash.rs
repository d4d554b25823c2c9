//! Hash digest validation

use vela_core::diagnostic::{AttributePath, Diagnostic};

/// Expected digest length in hex characters, per supported algorithm
fn digest_length(algorithm: &str) -> Option<usize> {
    match algorithm {
        "md5" => Some(32),
        "sha256" => Some(64),
        "sha512" => Some(128),
        _ => None,
    }
}

/// Check that a value is a hex digest of the named algorithm.
///
/// An unsupported algorithm name is itself a violation, reported against
/// the same attribute: the schema declared a contract that cannot hold.
pub(super) fn check_hash(path: &AttributePath, value: &str, algorithm: &str) -> Option<Diagnostic> {
    let Some(expected_len) = digest_length(algorithm) else {
        return Some(Diagnostic::attribute_error(
            path.clone(),
            "Unsupported Hash Algorithm",
            format!(
                "unsupported hash algorithm \"{}\" (expected one of: md5, sha256, sha512)",
                algorithm
            ),
        ));
    };

    if value.len() == expected_len && value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some(Diagnostic::attribute_error(
        path.clone(),
        "Invalid Hash",
        format!(
            "\"{}\" is not a valid {} digest: expected {} hexadecimal characters",
            value, algorithm, expected_len
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
    fn test_check_hash_md5() {
        assert_eq!(
            check_hash(&path(), "0123456789abcdef0123456789abcdef", "md5"),
            None
        );
        assert!(check_hash(&path(), "test-value", "md5").is_some());
        assert!(check_hash(&path(), "0123456789abcdef", "md5").is_some());
    }

    #[test]
    fn test_check_hash_sha256() {
        let digest = "a".repeat(64);
        assert_eq!(check_hash(&path(), &digest, "sha256"), None);
        assert!(check_hash(&path(), &"a".repeat(63), "sha256").is_some());
    }

    #[test]
    fn test_check_hash_sha512() {
        let digest = "0F".repeat(64);
        assert_eq!(check_hash(&path(), &digest, "sha512"), None);
    }

    #[test]
    fn unsupported_algorithm_is_reported() {
        let diag = check_hash(&path(), "whatever", "crc32").unwrap();
        assert_eq!(diag.summary, "Unsupported Hash Algorithm");
        assert!(diag.detail.contains("crc32"));
    }

    #[test]
    fn non_hex_characters_are_rejected() {
        let diag = check_hash(&path(), &"g".repeat(32), "md5").unwrap();
        assert_eq!(diag.summary, "Invalid Hash");
    }
}
