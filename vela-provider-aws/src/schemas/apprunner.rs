//! App Runner schema definitions

use std::time::Duration;

use vela_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

use super::{AwsSchemaConfig, OperationTimeouts, StabilizeSpec, tags_type};
use crate::validators::Validator;

/// Returns the schema config for apprunner_service (AWS::AppRunner::Service)
///
/// Provisioning a service builds and deploys the application, so the
/// budget is long and status polls are coarse. After the create operation
/// completes the service is polled until it reports RUNNING; reads right
/// after create may briefly miss the resource.
pub fn apprunner_service_config() -> AwsSchemaConfig {
    AwsSchemaConfig {
        aws_type_name: "AWS::AppRunner::Service",
        has_tags: true,
        timeouts: OperationTimeouts {
            create: Duration::from_secs(20 * 60),
            update: Duration::from_secs(20 * 60),
            delete: Duration::from_secs(20 * 60),
        },
        poll_interval: Duration::from_secs(30),
        validators: vec![
            ("service_name", vec![Validator::ClusterIdentifier]),
            ("source_configuration", vec![Validator::Json]),
            ("auto_scaling_configuration_arn", vec![Validator::Arn]),
            ("kms_key_arn", vec![Validator::Arn]),
        ],
        json_documents: &["source_configuration"],
        stabilize: Some(StabilizeSpec {
            status_property: "Status",
            pending: &["OPERATION_IN_PROGRESS"],
            target: &["RUNNING"],
            not_found_checks: 5,
            interval: Duration::from_secs(15),
        }),
        schema: ResourceSchema::new("aws.apprunner_service")
            .with_description("An App Runner service running a container image or source build.")
            .attribute(
                AttributeSchema::new("service_name", AttributeType::String)
                    .with_description("Name of the service, unique per region")
                    .with_provider_name("ServiceName")
                    .required(),
            )
            .attribute(
                AttributeSchema::new("source_configuration", AttributeType::String)
                    .with_description(
                        "JSON document describing the code or image source the service runs",
                    )
                    .with_provider_name("SourceConfiguration")
                    .required(),
            )
            .attribute(
                AttributeSchema::new("auto_scaling_configuration_arn", AttributeType::String)
                    .with_description("ARN of the auto-scaling configuration to associate")
                    .with_provider_name("AutoScalingConfigurationArn"),
            )
            .attribute(
                AttributeSchema::new("kms_key_arn", AttributeType::String)
                    .with_description("Customer-managed key encrypting stored source artifacts")
                    .with_provider_name("KmsKey"),
            )
            .attribute(
                AttributeSchema::new("service_arn", AttributeType::String)
                    .with_description(" (read-only)")
                    .with_provider_name("ServiceArn"),
            )
            .attribute(
                AttributeSchema::new("service_url", AttributeType::String)
                    .with_description(" (read-only)")
                    .with_provider_name("ServiceUrl"),
            )
            .attribute(
                AttributeSchema::new("status", AttributeType::String)
                    .with_description(" (read-only)")
                    .with_provider_name("Status"),
            )
            .attribute(
                AttributeSchema::new("tags", tags_type())
                    .with_description("Tags for the service")
                    .with_provider_name("Tags"),
            ),
    }
}

/// Returns the schema config for apprunner_auto_scaling_configuration
/// (AWS::AppRunner::AutoScalingConfiguration)
///
/// A lightweight configuration object; provisioning completes in seconds.
pub fn apprunner_auto_scaling_configuration_config() -> AwsSchemaConfig {
    AwsSchemaConfig {
        aws_type_name: "AWS::AppRunner::AutoScalingConfiguration",
        has_tags: true,
        timeouts: OperationTimeouts::uniform(Duration::from_secs(2 * 60)),
        poll_interval: Duration::from_secs(2),
        validators: vec![(
            "auto_scaling_configuration_name",
            vec![Validator::ClusterIdentifierPrefix],
        )],
        json_documents: &[],
        stabilize: None,
        schema: ResourceSchema::new("aws.apprunner_auto_scaling_configuration")
            .with_description("Scaling bounds shared by one or more App Runner services.")
            .attribute(
                AttributeSchema::new("auto_scaling_configuration_name", AttributeType::String)
                    .with_description("Name of the configuration; revisions share a name")
                    .with_provider_name("AutoScalingConfigurationName")
                    .required(),
            )
            .attribute(
                AttributeSchema::new("max_concurrency", AttributeType::Int)
                    .with_description("Concurrent requests per instance before scaling out")
                    .with_provider_name("MaxConcurrency"),
            )
            .attribute(
                AttributeSchema::new("max_size", AttributeType::Int)
                    .with_description("Upper bound of provisioned instances")
                    .with_provider_name("MaxSize"),
            )
            .attribute(
                AttributeSchema::new("min_size", AttributeType::Int)
                    .with_description("Lower bound of provisioned instances")
                    .with_provider_name("MinSize"),
            )
            .attribute(
                AttributeSchema::new("auto_scaling_configuration_arn", AttributeType::String)
                    .with_description(" (read-only)")
                    .with_provider_name("AutoScalingConfigurationArn"),
            )
            .attribute(
                AttributeSchema::new("latest", AttributeType::Bool)
                    .with_description(" (read-only)")
                    .with_provider_name("Latest"),
            )
            .attribute(
                AttributeSchema::new("tags", tags_type())
                    .with_description("Tags for the configuration")
                    .with_provider_name("Tags"),
            ),
    }
}
