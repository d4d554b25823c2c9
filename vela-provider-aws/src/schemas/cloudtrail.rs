//! CloudTrail schema definitions

use std::time::Duration;

use vela_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

use super::{AwsSchemaConfig, OperationTimeouts, tags_type};
use crate::validators::Validator;

/// Returns the schema config for cloudtrail_trail (AWS::CloudTrail::Trail)
pub fn cloudtrail_trail_config() -> AwsSchemaConfig {
    AwsSchemaConfig {
        aws_type_name: "AWS::CloudTrail::Trail",
        has_tags: true,
        timeouts: OperationTimeouts::uniform(Duration::from_secs(5 * 60)),
        poll_interval: Duration::from_secs(5),
        validators: vec![
            ("trail_name", vec![Validator::ClusterIdentifier]),
            ("cloud_watch_logs_log_group_arn", vec![Validator::Arn]),
            ("cloud_watch_logs_role_arn", vec![Validator::Arn]),
            ("kms_key_id", vec![Validator::Arn]),
            ("advanced_event_selectors", vec![Validator::Json]),
        ],
        json_documents: &["advanced_event_selectors"],
        stabilize: None,
        schema: ResourceSchema::new("aws.cloudtrail_trail")
            .with_description(
                "A trail recording API activity into an S3 bucket, optionally mirrored to \
                 CloudWatch Logs.",
            )
            .attribute(
                AttributeSchema::new("trail_name", AttributeType::String)
                    .with_provider_name("TrailName")
                    .required(),
            )
            .attribute(
                AttributeSchema::new("s3_bucket_name", AttributeType::String)
                    .with_description("Bucket receiving log files")
                    .with_provider_name("S3BucketName")
                    .required(),
            )
            .attribute(
                AttributeSchema::new("s3_key_prefix", AttributeType::String)
                    .with_description("Prefix prepended to delivered log keys")
                    .with_provider_name("S3KeyPrefix"),
            )
            .attribute(
                AttributeSchema::new("is_logging", AttributeType::Bool)
                    .with_description("Whether the trail is currently recording")
                    .with_provider_name("IsLogging")
                    .required(),
            )
            .attribute(
                AttributeSchema::new("is_multi_region_trail", AttributeType::Bool)
                    .with_provider_name("IsMultiRegionTrail"),
            )
            .attribute(
                AttributeSchema::new("include_global_service_events", AttributeType::Bool)
                    .with_provider_name("IncludeGlobalServiceEvents"),
            )
            .attribute(
                AttributeSchema::new("enable_log_file_validation", AttributeType::Bool)
                    .with_provider_name("EnableLogFileValidation"),
            )
            .attribute(
                AttributeSchema::new("cloud_watch_logs_log_group_arn", AttributeType::String)
                    .with_description("Log group receiving a copy of recorded events")
                    .with_provider_name("CloudWatchLogsLogGroupArn"),
            )
            .attribute(
                AttributeSchema::new("cloud_watch_logs_role_arn", AttributeType::String)
                    .with_description("Role the trail assumes to write to the log group")
                    .with_provider_name("CloudWatchLogsRoleArn"),
            )
            .attribute(
                AttributeSchema::new("kms_key_id", AttributeType::String)
                    .with_description("Key encrypting delivered log files")
                    .with_provider_name("KMSKeyId"),
            )
            .attribute(
                AttributeSchema::new("sns_topic_name", AttributeType::String)
                    .with_description("Topic notified on log delivery")
                    .with_provider_name("SnsTopicName"),
            )
            .attribute(
                AttributeSchema::new("advanced_event_selectors", AttributeType::String)
                    .with_description("JSON document of fine-grained event selectors")
                    .with_provider_name("AdvancedEventSelectors"),
            )
            .attribute(
                AttributeSchema::new("arn", AttributeType::String)
                    .with_description(" (read-only)")
                    .with_provider_name("Arn"),
            )
            .attribute(
                AttributeSchema::new("tags", tags_type())
                    .with_provider_name("Tags"),
            ),
    }
}
