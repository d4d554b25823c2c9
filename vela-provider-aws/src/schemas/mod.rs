//! AWS resource schema configurations
//!
//! Each resource type pairs its attribute schema with AWS-specific
//! metadata: the CloudFormation type name, validator chains selected per
//! attribute, operation timeouts, and how to poll the resource into a
//! stable state after create.

pub mod apprunner;
pub mod cloudtrail;
pub mod redshift;
pub mod vpc;

use std::time::Duration;

use vela_core::schema::{AttributeType, ResourceSchema};

use crate::validators::Validator;

/// Tags type for AWS resources (map of string)
pub fn tags_type() -> AttributeType {
    AttributeType::Map(Box::new(AttributeType::String))
}

/// Wall-clock budgets for the lifecycle operations.
///
/// These range from a couple of minutes for lightweight configuration
/// objects to tens of minutes for full service provisioning.
#[derive(Debug, Clone, Copy)]
pub struct OperationTimeouts {
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl OperationTimeouts {
    pub const fn uniform(timeout: Duration) -> Self {
        Self {
            create: timeout,
            update: timeout,
            delete: timeout,
        }
    }
}

/// How to poll a freshly created resource until it settles.
///
/// Reads right after create are eventually consistent, so a small number
/// of not-found observations is tolerated before they count as failure.
pub struct StabilizeSpec {
    /// Property of the resource document that carries the state label
    pub status_property: &'static str,
    /// States that mean "keep polling"
    pub pending: &'static [&'static str],
    /// States that mean "done"
    pub target: &'static [&'static str],
    /// Consecutive not-found observations to tolerate
    pub not_found_checks: u32,
    /// Tick between status reads
    pub interval: Duration,
}

/// Schema configuration for one AWS resource type
pub struct AwsSchemaConfig {
    /// AWS CloudFormation type name (e.g., "AWS::AppRunner::Service")
    pub aws_type_name: &'static str,
    /// Whether this resource type uses tags
    pub has_tags: bool,
    /// The resource schema with attribute definitions
    pub schema: ResourceSchema,
    /// Budgets for create/update/delete waits
    pub timeouts: OperationTimeouts,
    /// Tick between operation-status polls; coarse for resource types
    /// whose status calls are expensive or rate-limited
    pub poll_interval: Duration,
    /// Validator chains, selected per attribute at schema-build time
    pub validators: Vec<(&'static str, Vec<Validator>)>,
    /// Attributes whose string value is an embedded JSON document,
    /// parsed into the desired-state document rather than sent as a string
    pub json_documents: &'static [&'static str],
    /// Post-create stabilization, for resource types that report a status
    pub stabilize: Option<StabilizeSpec>,
}

impl AwsSchemaConfig {
    /// The validator chain declared for an attribute
    pub fn validators_for(&self, attribute: &str) -> &[Validator] {
        self.validators
            .iter()
            .find(|(name, _)| *name == attribute)
            .map(|(_, chain)| chain.as_slice())
            .unwrap_or(&[])
    }

    /// Whether an attribute's string value embeds a JSON document
    pub fn is_json_document(&self, attribute: &str) -> bool {
        self.json_documents.contains(&attribute)
    }
}

/// Returns all schema configs supported by this provider
pub fn configs() -> Vec<AwsSchemaConfig> {
    vec![
        apprunner::apprunner_service_config(),
        apprunner::apprunner_auto_scaling_configuration_config(),
        cloudtrail::cloudtrail_trail_config(),
        redshift::redshift_cluster_config(),
        vpc::ec2_vpc_config(),
    ]
}

/// Get the schema config for a resource type
pub fn get_schema_config(resource_type: &str) -> Option<AwsSchemaConfig> {
    configs().into_iter().find(|c| {
        // Match by schema resource_type: "aws.apprunner_service" -> "apprunner_service"
        c.schema
            .resource_type
            .strip_prefix("aws.")
            .map(|t| t == resource_type)
            .unwrap_or(false)
    })
}
