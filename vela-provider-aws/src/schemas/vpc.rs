//! VPC schema definitions

use std::time::Duration;

use vela_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

use super::{AwsSchemaConfig, OperationTimeouts, tags_type};
use crate::validators::Validator;

/// Returns the schema config for ec2_vpc (AWS::EC2::VPC)
pub fn ec2_vpc_config() -> AwsSchemaConfig {
    AwsSchemaConfig {
        aws_type_name: "AWS::EC2::VPC",
        has_tags: true,
        timeouts: OperationTimeouts::uniform(Duration::from_secs(2 * 60)),
        poll_interval: Duration::from_secs(2),
        validators: vec![("cidr_block", vec![Validator::Ipv4CidrNetworkAddress])],
        json_documents: &[],
        stabilize: None,
        schema: ResourceSchema::new("aws.ec2_vpc")
            .with_description("A virtual private cloud.")
            .attribute(
                AttributeSchema::new("cidr_block", AttributeType::String)
                    .with_description("IPv4 network range of the VPC, in CIDR notation")
                    .with_provider_name("CidrBlock")
                    .required(),
            )
            .attribute(
                AttributeSchema::new(
                    "instance_tenancy",
                    AttributeType::Enum(vec![
                        "default".to_string(),
                        "dedicated".to_string(),
                        "host".to_string(),
                    ]),
                )
                .with_description("Tenancy of instances launched into the VPC")
                .with_provider_name("InstanceTenancy"),
            )
            .attribute(
                AttributeSchema::new("enable_dns_hostnames", AttributeType::Bool)
                    .with_provider_name("EnableDnsHostnames"),
            )
            .attribute(
                AttributeSchema::new("enable_dns_support", AttributeType::Bool)
                    .with_provider_name("EnableDnsSupport"),
            )
            .attribute(
                AttributeSchema::new("vpc_id", AttributeType::String)
                    .with_description(" (read-only)")
                    .with_provider_name("VpcId"),
            )
            .attribute(
                AttributeSchema::new("default_security_group", AttributeType::String)
                    .with_description(" (read-only)")
                    .with_provider_name("DefaultSecurityGroup"),
            )
            .attribute(
                AttributeSchema::new("tags", tags_type())
                    .with_description("Tags for the VPC")
                    .with_provider_name("Tags"),
            ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_core::diagnostic::AttributePath;
    use vela_core::resource::Value;

    #[test]
    fn vpc_cidr_block_must_be_a_network_address() {
        let config = ec2_vpc_config();
        let chain = config.validators_for("cidr_block");
        let path = AttributePath::root("cidr_block");

        assert!(
            chain
                .iter()
                .all(|v| v.check(&path, &Value::String("10.0.0.0/16".to_string())).is_none())
        );
        assert!(
            chain
                .iter()
                .any(|v| v.check(&path, &Value::String("10.0.0.5/16".to_string())).is_some())
        );
    }
}
