//! Attribute validators
//!
//! Structural validation of declared attribute values: ARNs, CIDR blocks,
//! identifiers, hashes, timestamps, and the other lexical contracts AWS
//! imposes on configuration strings. Each validator is a pure function of
//! (value, static rules): no I/O, no state, deterministic.
//!
//! Validators are selected per attribute at schema-build time as variants
//! of the closed [`Validator`] enum, and all expose the same capability:
//! `check(path, value)` returning at most one diagnostic.
//!
//! Null and not-yet-known values always pass: an unresolved reference
//! cannot be checked until the resource it points at exists, and a missing
//! optional value is not a violation. Required-ness is the schema's
//! concern, not the validators'.

mod arn;
mod collection;
mod hash;
mod identifier;
mod json;
mod network;
mod numeric;
mod organization;
mod principal;
mod storage;
mod strings;
mod time;

use vela_core::diagnostic::{AttributePath, Diagnostic};
use vela_core::resource::Value;

/// A single attribute validation rule
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    /// Five-section ARN grammar with partition/region/account checks
    Arn,
    /// Exactly 12 ASCII digits
    AccountId,
    /// Organizations OU identifier (`ou-xxxx-xxxxxxxx`)
    OrganizationOuId,
    /// Organizations root identifier (`r-xxxx`)
    OrganizationRootId,
    /// Lowercase letters, digits and single hyphens; starts with a letter;
    /// no trailing hyphen
    ClusterIdentifier,
    /// Like [`Validator::ClusterIdentifier`] but a trailing hyphen is
    /// allowed, since more characters are appended later
    ClusterIdentifierPrefix,
    /// Letters, digits and single hyphens; no trailing hyphen
    FinalSnapshotIdentifier,
    /// Hex digest of the named algorithm ("md5", "sha256", "sha512")
    Hash(String),
    /// IPv4 CIDR block whose host bits are all zero
    Ipv4CidrNetworkAddress,
    /// IPv6 CIDR block whose host bits are all zero
    Ipv6CidrNetworkAddress,
    /// Address strictly in the IPv4 family
    Ipv4Address,
    /// Address strictly in the IPv6 family (v4-mapped rejected)
    Ipv6Address,
    /// Syntactically valid JSON document
    Json,
    /// `s3://bucket[/key]` URI
    S3Uri,
    /// Dotted service hostname ending in a cloud domain suffix
    ServicePrincipal,
    /// RFC 3339 timestamp with a literal "Z" offset
    UtcTimestamp,
    /// `hh24:mi-hh24:mi` maintenance window
    OnceADayWindow,
    /// `ddd:hh24:mi-ddd:hh24:mi` maintenance window
    OnceAWeekWindow,
    /// String that parses as an i64 within the inclusive bounds.
    /// A validator constructed with min > max can never be satisfied and
    /// checks nothing.
    Int64StringBetween { min: i64, max: i64 },
    /// Boolean value equal to the expected one
    BoolEquals(bool),
    /// Value must not start with any of the listed prefixes (case-sensitive)
    PrefixNoneOf(Vec<String>),
    /// Value must not end with any of the listed suffixes (case-sensitive)
    SuffixNoneOf(Vec<String>),
    /// No null elements in a list value
    NonNullValues,
}

impl Validator {
    /// Check one attribute value against this rule.
    ///
    /// Returns `None` when the value satisfies the rule, is null, or is
    /// not yet known; otherwise exactly one diagnostic describing the
    /// violation.
    pub fn check(&self, path: &AttributePath, value: &Value) -> Option<Diagnostic> {
        if value.is_null() || value.is_unknown() {
            return None;
        }

        match self {
            Validator::Arn => with_string(path, value, arn::check_arn),
            Validator::AccountId => with_string(path, value, arn::check_account_id),
            Validator::OrganizationOuId => with_string(path, value, organization::check_ou_id),
            Validator::OrganizationRootId => {
                with_string(path, value, organization::check_root_id)
            }
            Validator::ClusterIdentifier => {
                with_string(path, value, identifier::check_cluster_identifier)
            }
            Validator::ClusterIdentifierPrefix => {
                with_string(path, value, identifier::check_cluster_identifier_prefix)
            }
            Validator::FinalSnapshotIdentifier => {
                with_string(path, value, identifier::check_final_snapshot_identifier)
            }
            Validator::Hash(algorithm) => {
                with_string(path, value, |path, s| hash::check_hash(path, s, algorithm))
            }
            Validator::Ipv4CidrNetworkAddress => {
                with_string(path, value, network::check_ipv4_cidr_network_address)
            }
            Validator::Ipv6CidrNetworkAddress => {
                with_string(path, value, network::check_ipv6_cidr_network_address)
            }
            Validator::Ipv4Address => with_string(path, value, network::check_ipv4_address),
            Validator::Ipv6Address => with_string(path, value, network::check_ipv6_address),
            Validator::Json => with_string(path, value, json::check_json),
            Validator::S3Uri => with_string(path, value, storage::check_s3_uri),
            Validator::ServicePrincipal => {
                with_string(path, value, principal::check_service_principal)
            }
            Validator::UtcTimestamp => with_string(path, value, time::check_utc_timestamp),
            Validator::OnceADayWindow => with_string(path, value, time::check_once_a_day_window),
            Validator::OnceAWeekWindow => {
                with_string(path, value, time::check_once_a_week_window)
            }
            Validator::Int64StringBetween { min, max } => with_string(path, value, |path, s| {
                numeric::check_int64_string_between(path, s, *min, *max)
            }),
            Validator::BoolEquals(expected) => {
                numeric::check_bool_equals(path, value, *expected)
            }
            Validator::PrefixNoneOf(prefixes) => {
                with_string(path, value, |path, s| {
                    strings::check_prefix_none_of(path, s, prefixes)
                })
            }
            Validator::SuffixNoneOf(suffixes) => {
                with_string(path, value, |path, s| {
                    strings::check_suffix_none_of(path, s, suffixes)
                })
            }
            Validator::NonNullValues => collection::check_non_null_values(path, value),
        }
    }
}

/// Run a string-based check, reporting a type diagnostic for concrete
/// non-string values
fn with_string(
    path: &AttributePath,
    value: &Value,
    check: impl FnOnce(&AttributePath, &str) -> Option<Diagnostic>,
) -> Option<Diagnostic> {
    match value.as_str() {
        Some(s) => check(path, s),
        None => Some(Diagnostic::attribute_error(
            path.clone(),
            "Invalid Type",
            format!("expected string, got {}", value.type_name()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> AttributePath {
        AttributePath::root("attr")
    }

    #[test]
    fn null_and_unknown_values_are_skipped() {
        let validators = [
            Validator::Arn,
            Validator::AccountId,
            Validator::Hash("md5".to_string()),
            Validator::Json,
            Validator::BoolEquals(true),
            Validator::NonNullValues,
        ];
        for v in validators {
            assert_eq!(v.check(&path(), &Value::Null), None, "{:?}", v);
            assert_eq!(
                v.check(&path(), &Value::Ref("db".to_string(), "arn".to_string())),
                None,
                "{:?}",
                v
            );
        }
    }

    #[test]
    fn string_validator_rejects_non_string() {
        let diag = Validator::Arn.check(&path(), &Value::Int(42)).unwrap();
        assert_eq!(diag.summary, "Invalid Type");
        assert!(diag.detail.contains("expected string, got int"));
    }

    #[test]
    fn check_is_idempotent() {
        let v = Validator::AccountId;
        let value = Value::String("not-an-account".to_string());
        let first = v.check(&path(), &value);
        let second = v.check(&path(), &value);
        assert_eq!(first, second);
        assert!(first.is_some());
    }
}
