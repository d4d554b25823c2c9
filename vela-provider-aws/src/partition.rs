//! Static AWS partition table
//!
//! Read-only lookup data describing the AWS partitions: identifier, the
//! region-code pattern regions of that partition must match, and the DNS
//! suffix its service hostnames end with. Injected into the ARN and
//! service-principal validators at schema-build time.

use std::sync::LazyLock;

use regex::Regex;

/// One AWS partition
pub struct Partition {
    /// Partition identifier (e.g., "aws", "aws-cn")
    pub id: &'static str,
    /// Pattern that region codes of this partition match
    pub region_pattern: &'static str,
    /// DNS suffix of service hostnames in this partition
    pub dns_suffix: &'static str,
}

/// All known partitions
pub const PARTITIONS: &[Partition] = &[
    Partition {
        id: "aws",
        region_pattern: r"^(af|ap|ca|eu|il|me|mx|sa|us)-\w+-\d+$",
        dns_suffix: "amazonaws.com",
    },
    Partition {
        id: "aws-cn",
        region_pattern: r"^cn-\w+-\d+$",
        dns_suffix: "amazonaws.com.cn",
    },
    Partition {
        id: "aws-us-gov",
        region_pattern: r"^us-gov-\w+-\d+$",
        dns_suffix: "amazonaws.com",
    },
    Partition {
        id: "aws-iso",
        region_pattern: r"^us-iso-\w+-\d+$",
        dns_suffix: "c2s.ic.gov",
    },
    Partition {
        id: "aws-iso-b",
        region_pattern: r"^us-isob-\w+-\d+$",
        dns_suffix: "sc2s.sgov.gov",
    },
];

static REGION_REGEXES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    PARTITIONS
        .iter()
        .map(|p| (p.id, Regex::new(p.region_pattern).unwrap()))
        .collect()
});

/// Look up a partition by identifier
pub fn find(id: &str) -> Option<&'static Partition> {
    PARTITIONS.iter().find(|p| p.id == id)
}

/// Whether `region` is a valid region code for the named partition.
///
/// Unknown partitions fall back to matching against every known
/// partition's pattern.
pub fn region_matches(partition_id: &str, region: &str) -> bool {
    match REGION_REGEXES.iter().find(|(id, _)| *id == partition_id) {
        Some((_, re)) => re.is_match(region),
        None => REGION_REGEXES.iter().any(|(_, re)| re.is_match(region)),
    }
}

/// Hostname suffixes a service principal may end with
pub fn service_principal_suffixes() -> impl Iterator<Item = String> {
    PARTITIONS
        .iter()
        .map(|p| format!(".{}", p.dns_suffix))
        .chain(std::iter::once(".amazon.com".to_string()))
}
