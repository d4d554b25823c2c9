//! ARN and account-ID validation

use std::sync::LazyLock;

use regex::Regex;
use vela_core::diagnostic::{AttributePath, Diagnostic};

use crate::partition;

static PARTITION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^aws[a-zA-Z-]*$").unwrap());

const ACCOUNT_ID_LENGTH: usize = 12;

/// Check the five-colon-section ARN grammar:
/// `arn:partition:service:region:account-id:resource`.
///
/// Region and account-id may be empty (global resources, service-owned
/// resources); when present they must be a valid region code for the
/// partition and a 12-digit account number.
pub(super) fn check_arn(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    parse_arn(value).err().map(|reason| {
        Diagnostic::attribute_error(
            path.clone(),
            "Invalid ARN",
            format!("\"{}\" is not a valid ARN: {}", value, reason),
        )
    })
}

fn parse_arn(value: &str) -> Result<(), String> {
    let sections: Vec<&str> = value.splitn(6, ':').collect();
    if sections.len() != 6 {
        return Err("expected 6 colon-separated sections".to_string());
    }
    let [prefix, partition, service, region, account, resource] = sections[..] else {
        return Err("expected 6 colon-separated sections".to_string());
    };

    if prefix != "arn" {
        return Err(format!("first section must be \"arn\", got \"{}\"", prefix));
    }
    if !PARTITION_PATTERN.is_match(partition) {
        return Err(format!("invalid partition \"{}\"", partition));
    }
    if service.is_empty() {
        return Err("service section must not be empty".to_string());
    }
    if !region.is_empty() && !partition::region_matches(partition, region) {
        return Err(format!("invalid region \"{}\"", region));
    }
    if !account.is_empty() && !is_account_id(account) {
        return Err(format!(
            "account ID \"{}\" must be exactly {} digits",
            account, ACCOUNT_ID_LENGTH
        ));
    }
    if resource.is_empty() {
        return Err("resource section must not be empty".to_string());
    }
    Ok(())
}

/// Check that a value is exactly 12 ASCII digits
pub(super) fn check_account_id(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    if is_account_id(value) {
        return None;
    }
    Some(Diagnostic::attribute_error(
        path.clone(),
        "Invalid Account ID",
        format!(
            "\"{}\" is not a valid AWS account ID: must be exactly {} digits",
            value, ACCOUNT_ID_LENGTH
        ),
    ))
}

fn is_account_id(value: &str) -> bool {
    value.len() == ACCOUNT_ID_LENGTH && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> AttributePath {
        AttributePath::root("attr")
    }

    #[test]
    fn valid_arns() {
        for arn in [
            "arn:aws:iam::123456789012:role/test",
            "arn:aws:s3:::my-bucket",
            "arn:aws:ec2:us-east-1:123456789012:vpc/vpc-0e9801d129EXAMPLE",
            "arn:aws-cn:ec2:cn-north-1:123456789012:instance/i-abc123",
            "arn:aws-us-gov:s3:::gov-bucket",
            "arn:aws:apprunner:ap-northeast-1:123456789012:service/api/8fe1e10304f84fd2b0df550fe98a71fa",
        ] {
            assert_eq!(check_arn(&path(), arn), None, "{}", arn);
        }
    }

    #[test]
    fn invalid_arns() {
        for arn in [
            "not-an-arn",
            "arn",
            "arn:aws:iam",
            "rna:aws:iam::123456789012:role/test",
            "arn:nope:iam::123456789012:role/test",
            "arn:aws::us-east-1:123456789012:vpc/vpc-abc",
            "arn:aws:ec2:us-east-1:123456789012:",
            "arn:aws:ec2:eu-east:123456789012:instance/i-abc",
            "arn:aws:iam::12345678901:role/test",
            "arn:aws:iam::12345678901a:role/test",
        ] {
            let diag = check_arn(&path(), arn).unwrap_or_else(|| panic!("accepted {}", arn));
            assert_eq!(diag.summary, "Invalid ARN");
            assert!(diag.detail.contains(arn));
        }
    }

    #[test]
    fn region_is_checked_against_partition() {
        // A China region code inside the commercial partition is invalid
        assert!(
            check_arn(&path(), "arn:aws:ec2:cn-north-1:123456789012:instance/i-abc").is_some()
        );
        assert_eq!(
            check_arn(&path(), "arn:aws-cn:ec2:cn-north-1:123456789012:instance/i-abc"),
            None
        );
    }

    #[test]
    fn test_check_account_id() {
        assert_eq!(check_account_id(&path(), "123456789012"), None);

        for bad in ["1234567890123", "12345678901", "12345678901a", ""] {
            let diag = check_account_id(&path(), bad).unwrap_or_else(|| panic!("accepted {:?}", bad));
            assert_eq!(diag.summary, "Invalid Account ID");
        }
    }
}
