//! Resource type registrations
//!
//! Maps configuration resource type names onto their schema configs for
//! the core `ResourceType` listing.

use vela_core::provider::ResourceType;
use vela_core::schema::ResourceSchema;

use crate::schemas::{self, AwsSchemaConfig};

struct SchemaResourceType {
    name: &'static str,
    config: fn() -> AwsSchemaConfig,
}

impl ResourceType for SchemaResourceType {
    fn name(&self) -> &'static str {
        self.name
    }

    fn schema(&self) -> ResourceSchema {
        (self.config)().schema
    }
}

/// Returns all resource types supported by this provider
pub fn resource_types() -> Vec<Box<dyn ResourceType>> {
    vec![
        Box::new(SchemaResourceType {
            name: "apprunner_service",
            config: schemas::apprunner::apprunner_service_config,
        }),
        Box::new(SchemaResourceType {
            name: "apprunner_auto_scaling_configuration",
            config: schemas::apprunner::apprunner_auto_scaling_configuration_config,
        }),
        Box::new(SchemaResourceType {
            name: "cloudtrail_trail",
            config: schemas::cloudtrail::cloudtrail_trail_config,
        }),
        Box::new(SchemaResourceType {
            name: "redshift_cluster",
            config: schemas::redshift::redshift_cluster_config,
        }),
        Box::new(SchemaResourceType {
            name: "ec2_vpc",
            config: schemas::vpc::ec2_vpc_config,
        }),
    ]
}
