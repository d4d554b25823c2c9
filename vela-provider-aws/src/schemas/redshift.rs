//! Redshift schema definitions

use std::time::Duration;

use vela_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

use super::{AwsSchemaConfig, OperationTimeouts, StabilizeSpec, tags_type};
use crate::validators::Validator;

/// Returns the schema config for redshift_cluster (AWS::Redshift::Cluster)
///
/// Cluster provisioning is the slowest operation this provider performs;
/// the budget is generous and status polls are coarse to stay inside the
/// describe-call rate limits.
pub fn redshift_cluster_config() -> AwsSchemaConfig {
    AwsSchemaConfig {
        aws_type_name: "AWS::Redshift::Cluster",
        has_tags: true,
        timeouts: OperationTimeouts {
            create: Duration::from_secs(30 * 60),
            update: Duration::from_secs(30 * 60),
            delete: Duration::from_secs(30 * 60),
        },
        poll_interval: Duration::from_secs(60),
        validators: vec![
            ("cluster_identifier", vec![Validator::ClusterIdentifier]),
            (
                "preferred_maintenance_window",
                vec![Validator::OnceAWeekWindow],
            ),
            ("kms_key_id", vec![Validator::Arn]),
            ("defer_maintenance_start_time", vec![Validator::UtcTimestamp]),
            ("defer_maintenance_end_time", vec![Validator::UtcTimestamp]),
        ],
        json_documents: &[],
        stabilize: Some(StabilizeSpec {
            status_property: "ClusterStatus",
            pending: &["creating", "modifying", "restoring"],
            target: &["available"],
            not_found_checks: 5,
            interval: Duration::from_secs(60),
        }),
        schema: ResourceSchema::new("aws.redshift_cluster")
            .with_description("A Redshift data warehouse cluster.")
            .attribute(
                AttributeSchema::new("cluster_identifier", AttributeType::String)
                    .with_description("Unique cluster name, used in connection endpoints")
                    .with_provider_name("ClusterIdentifier")
                    .required(),
            )
            .attribute(
                AttributeSchema::new("node_type", AttributeType::String)
                    .with_description("Instance type of the cluster nodes")
                    .with_provider_name("NodeType")
                    .required(),
            )
            .attribute(
                AttributeSchema::new(
                    "cluster_type",
                    AttributeType::Enum(vec![
                        "single-node".to_string(),
                        "multi-node".to_string(),
                    ]),
                )
                .with_provider_name("ClusterType")
                .required(),
            )
            .attribute(
                AttributeSchema::new("number_of_nodes", AttributeType::Int)
                    .with_description("Node count; only valid for multi-node clusters")
                    .with_provider_name("NumberOfNodes"),
            )
            .attribute(
                AttributeSchema::new("master_username", AttributeType::String)
                    .with_provider_name("MasterUsername")
                    .required(),
            )
            .attribute(
                AttributeSchema::new("db_name", AttributeType::String)
                    .with_description("Name of the first database created in the cluster")
                    .with_provider_name("DBName")
                    .required(),
            )
            .attribute(
                AttributeSchema::new("preferred_maintenance_window", AttributeType::String)
                    .with_description("Weekly window in which maintenance may run")
                    .with_provider_name("PreferredMaintenanceWindow"),
            )
            .attribute(
                AttributeSchema::new("defer_maintenance_start_time", AttributeType::String)
                    .with_provider_name("DeferMaintenanceStartTime"),
            )
            .attribute(
                AttributeSchema::new("defer_maintenance_end_time", AttributeType::String)
                    .with_provider_name("DeferMaintenanceEndTime"),
            )
            .attribute(
                AttributeSchema::new("kms_key_id", AttributeType::String)
                    .with_description("Key encrypting data at rest")
                    .with_provider_name("KmsKeyId"),
            )
            .attribute(
                AttributeSchema::new("encrypted", AttributeType::Bool)
                    .with_provider_name("Encrypted"),
            )
            .attribute(
                AttributeSchema::new("publicly_accessible", AttributeType::Bool)
                    .with_provider_name("PubliclyAccessible"),
            )
            .attribute(
                AttributeSchema::new("cluster_namespace_arn", AttributeType::String)
                    .with_description(" (read-only)")
                    .with_provider_name("ClusterNamespaceArn"),
            )
            .attribute(
                AttributeSchema::new("tags", tags_type())
                    .with_provider_name("Tags"),
            ),
    }
}
