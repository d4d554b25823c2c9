//! AWS provider implementation
//!
//! Translates resource lifecycle operations into AWS Cloud Control API
//! calls. Configuration is validated against the schema configs before any
//! remote call; mutations are followed by a status wait until the
//! operation (and, where declared, the resource itself) reaches a terminal
//! state.

use std::collections::HashMap;
use std::time::Duration;

use aws_config::Region;
use aws_sdk_cloudcontrol::Client as CloudControlClient;
use aws_sdk_cloudcontrol::types::{OperationStatus, ProgressEvent};
use log::debug;
use serde_json::json;
use vela_core::diagnostic::{AttributePath, Diagnostic};
use vela_core::provider::{ProviderError, ProviderResult};
use vela_core::resource::{Resource, ResourceId, State, Value};

use crate::schemas::{AwsSchemaConfig, StabilizeSpec, get_schema_config};
use crate::tags;
use crate::waiter::{Refresh, RefreshFn, StateWaiter};

/// AWS provider backed by the Cloud Control API
pub struct AwsProvider {
    cloudcontrol_client: CloudControlClient,
    region: String,
}

impl AwsProvider {
    /// Create a new AwsProvider for the specified region
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self {
            cloudcontrol_client: CloudControlClient::new(&config),
            region: region.to_string(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validate a declared resource against its schema config.
    ///
    /// Shallow type checks run first, then each attribute's validator
    /// chain. All diagnostics are collected; the lifecycle operations
    /// refuse to touch AWS while any remain.
    pub fn validate_resource(&self, resource: &Resource) -> Vec<Diagnostic> {
        let Some(config) = get_schema_config(&resource.id.resource_type) else {
            return vec![Diagnostic::attribute_error(
                AttributePath::root(resource.id.resource_type.clone()),
                "Unknown Resource Type",
                format!(
                    "no schema is registered for resource type \"{}\"",
                    resource.id.resource_type
                ),
            )];
        };
        validate_with_config(&config, resource)
    }

    // =========================================================================
    // Cloud Control API Methods
    // =========================================================================

    /// Get a resource's properties by identifier
    pub async fn cc_get_resource(
        &self,
        type_name: &str,
        identifier: &str,
    ) -> ProviderResult<Option<serde_json::Value>> {
        get_resource_properties(&self.cloudcontrol_client, type_name, identifier).await
    }

    /// Create a resource and wait for the operation to finish, returning
    /// the new identifier
    pub async fn cc_create_resource(
        &self,
        type_name: &str,
        desired_state: serde_json::Value,
        timeout: Duration,
        poll_interval: Duration,
    ) -> ProviderResult<String> {
        let result = self
            .cloudcontrol_client
            .create_resource()
            .type_name(type_name)
            .desired_state(desired_state.to_string())
            .send()
            .await
            .map_err(|e| ProviderError::new(format!("failed to create resource: {:?}", e)))?;

        let request_token = result
            .progress_event()
            .and_then(|p| p.request_token())
            .ok_or_else(|| ProviderError::new("no request token returned"))?;

        let progress = self
            .wait_for_operation(request_token, timeout, poll_interval)
            .await?;
        progress
            .identifier()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::new("operation succeeded without an identifier"))
    }

    /// Apply a JSON-patch update and wait for the operation to finish
    pub async fn cc_update_resource(
        &self,
        type_name: &str,
        identifier: &str,
        patch_ops: Vec<serde_json::Value>,
        timeout: Duration,
        poll_interval: Duration,
    ) -> ProviderResult<()> {
        if patch_ops.is_empty() {
            return Ok(());
        }

        let patch_document = serde_json::to_string(&patch_ops)
            .map_err(|e| ProviderError::new(format!("failed to build patch: {}", e)))?;

        let result = self
            .cloudcontrol_client
            .update_resource()
            .type_name(type_name)
            .identifier(identifier)
            .patch_document(patch_document)
            .send()
            .await
            .map_err(|e| ProviderError::new(format!("failed to update resource: {:?}", e)))?;

        if let Some(request_token) = result.progress_event().and_then(|p| p.request_token()) {
            self.wait_for_operation(request_token, timeout, poll_interval)
                .await?;
        }

        Ok(())
    }

    /// Delete a resource and wait for the operation to finish
    pub async fn cc_delete_resource(
        &self,
        type_name: &str,
        identifier: &str,
        timeout: Duration,
        poll_interval: Duration,
    ) -> ProviderResult<()> {
        let result = self
            .cloudcontrol_client
            .delete_resource()
            .type_name(type_name)
            .identifier(identifier)
            .send()
            .await
            .map_err(|e| ProviderError::new(format!("failed to delete resource: {:?}", e)))?;

        if let Some(request_token) = result.progress_event().and_then(|p| p.request_token()) {
            self.wait_for_operation(request_token, timeout, poll_interval)
                .await?;
        }

        Ok(())
    }

    // =========================================================================
    // Waiters
    // =========================================================================

    /// Wait for a Cloud Control operation to reach SUCCESS.
    ///
    /// FAILED and CANCEL_COMPLETE surface as fatal errors carrying the
    /// service's status message; the waiter's own timeout applies while
    /// the operation remains PENDING or IN_PROGRESS.
    async fn wait_for_operation(
        &self,
        request_token: &str,
        timeout: Duration,
        poll_interval: Duration,
    ) -> ProviderResult<ProgressEvent> {
        let client = self.cloudcontrol_client.clone();
        let token = request_token.to_string();

        let refresh: RefreshFn<ProgressEvent> = Box::new(move || {
            let client = client.clone();
            let token = token.clone();
            Box::pin(async move {
                let response = client
                    .get_resource_request_status()
                    .request_token(token)
                    .send()
                    .await
                    .map_err(|e| {
                        ProviderError::new(format!("failed to get operation status: {:?}", e))
                    })?;

                let progress = response
                    .progress_event()
                    .cloned()
                    .ok_or_else(|| ProviderError::new("operation status carried no progress event"))?;

                match progress.operation_status().cloned() {
                    Some(OperationStatus::Failed) => {
                        let message = progress.status_message().unwrap_or("unknown error");
                        Err(ProviderError::new(format!("operation failed: {}", message)))
                    }
                    Some(OperationStatus::CancelComplete) => {
                        Err(ProviderError::new("operation was cancelled by the service"))
                    }
                    Some(status) => Ok(Refresh::Found {
                        status: status.as_str().to_string(),
                        object: progress,
                    }),
                    None => Err(ProviderError::new("operation status carried no state")),
                }
            })
        });

        StateWaiter::new(refresh)
            .pending(["PENDING", "IN_PROGRESS"])
            .target(["SUCCESS"])
            .timeout(timeout)
            .interval(poll_interval)
            .wait()
            .await
            .map_err(ProviderError::from)
    }

    /// Poll a freshly created resource until its status property reaches
    /// the declared target set
    async fn wait_for_stabilization(
        &self,
        aws_type_name: &str,
        spec: &StabilizeSpec,
        identifier: &str,
        timeout: Duration,
    ) -> ProviderResult<serde_json::Value> {
        let client = self.cloudcontrol_client.clone();
        let type_name = aws_type_name.to_string();
        let identifier = identifier.to_string();
        let status_property = spec.status_property;

        let refresh: RefreshFn<serde_json::Value> = Box::new(move || {
            let client = client.clone();
            let type_name = type_name.clone();
            let identifier = identifier.clone();
            Box::pin(async move {
                match get_resource_properties(&client, &type_name, &identifier).await? {
                    None => Ok(Refresh::NotFound),
                    Some(properties) => {
                        let status = properties
                            .get(status_property)
                            .and_then(|v| v.as_str())
                            .unwrap_or_default()
                            .to_string();
                        Ok(Refresh::Found {
                            object: properties,
                            status,
                        })
                    }
                }
            })
        });

        StateWaiter::new(refresh)
            .pending(spec.pending.iter().copied())
            .target(spec.target.iter().copied())
            .timeout(timeout)
            .interval(spec.interval)
            .not_found_checks(spec.not_found_checks)
            .wait()
            .await
            .map_err(ProviderError::from)
    }

    // =========================================================================
    // Resource Operations
    // =========================================================================

    /// Read a resource using its configuration
    pub async fn read_resource(
        &self,
        resource_type: &str,
        name: &str,
        identifier: Option<&str>,
    ) -> ProviderResult<State> {
        let id = ResourceId::new(resource_type, name);

        let config = get_schema_config(resource_type).ok_or_else(|| {
            ProviderError::new(format!("unknown resource type: {}", resource_type))
                .for_resource(id.clone())
        })?;

        let Some(identifier) = identifier else {
            return Ok(State::not_found(id));
        };

        let Some(properties) = self.cc_get_resource(config.aws_type_name, identifier).await?
        else {
            return Ok(State::not_found(id));
        };

        let mut attributes = HashMap::new();

        for (dsl_name, attr_schema) in &config.schema.attributes {
            if dsl_name.as_str() == "tags" {
                continue;
            }
            if let Some(aws_name) = &attr_schema.provider_name
                && let Some(value) = properties.get(aws_name.as_str())
            {
                if config.is_json_document(dsl_name) {
                    if !value.is_null() {
                        attributes.insert(dsl_name.clone(), Value::String(value.to_string()));
                    }
                } else if let Some(v) = json_to_value(value) {
                    attributes.insert(dsl_name.clone(), v);
                }
            }
        }

        if config.has_tags
            && let Some(tags_array) = properties.get("Tags").and_then(|v| v.as_array())
        {
            let tags_map = tags::flatten_tags(tags_array);
            if !tags_map.is_empty() {
                attributes.insert("tags".to_string(), Value::Map(tags_map));
            }
        }

        Ok(State::existing(id, attributes).with_identifier(identifier))
    }

    /// Create a resource using its configuration
    pub async fn create_resource(&self, resource: Resource) -> ProviderResult<State> {
        let config = get_schema_config(&resource.id.resource_type).ok_or_else(|| {
            ProviderError::new(format!(
                "unknown resource type: {}",
                resource.id.resource_type
            ))
            .for_resource(resource.id.clone())
        })?;

        let diagnostics = validate_with_config(&config, &resource);
        if !diagnostics.is_empty() {
            return Err(configuration_error(&resource.id, &diagnostics));
        }

        let desired_state = build_desired_state(&config, &resource)
            .map_err(|e| e.for_resource(resource.id.clone()))?;

        debug!(
            "creating {} as {}",
            resource.id, config.aws_type_name
        );
        let identifier = self
            .cc_create_resource(
                config.aws_type_name,
                serde_json::Value::Object(desired_state),
                config.timeouts.create,
                config.poll_interval,
            )
            .await
            .map_err(|e| e.for_resource(resource.id.clone()))?;

        if let Some(spec) = &config.stabilize {
            self.wait_for_stabilization(
                config.aws_type_name,
                spec,
                &identifier,
                config.timeouts.create,
            )
            .await
            .map_err(|e| e.for_resource(resource.id.clone()))?;
        }

        self.read_resource(
            &resource.id.resource_type,
            &resource.id.name,
            Some(&identifier),
        )
        .await
    }

    /// Update a resource in place
    pub async fn update_resource(
        &self,
        id: ResourceId,
        identifier: &str,
        from: &State,
        to: Resource,
    ) -> ProviderResult<State> {
        let config = get_schema_config(&id.resource_type).ok_or_else(|| {
            ProviderError::new(format!("unknown resource type: {}", id.resource_type))
                .for_resource(id.clone())
        })?;

        let diagnostics = validate_with_config(&config, &to);
        if !diagnostics.is_empty() {
            return Err(configuration_error(&id, &diagnostics));
        }

        let patch_ops =
            build_patch_ops(&config, from, &to).map_err(|e| e.for_resource(id.clone()))?;

        debug!("updating {} with {} patch ops", id, patch_ops.len());
        self.cc_update_resource(
            config.aws_type_name,
            identifier,
            patch_ops,
            config.timeouts.update,
            config.poll_interval,
        )
        .await
        .map_err(|e| e.for_resource(id.clone()))?;

        self.read_resource(&id.resource_type, &id.name, Some(identifier))
            .await
    }

    /// Delete a resource
    pub async fn delete_resource(&self, id: &ResourceId, identifier: &str) -> ProviderResult<()> {
        let config = get_schema_config(&id.resource_type).ok_or_else(|| {
            ProviderError::new(format!("unknown resource type: {}", id.resource_type))
                .for_resource(id.clone())
        })?;

        debug!("deleting {} ({})", id, identifier);
        self.cc_delete_resource(
            config.aws_type_name,
            identifier,
            config.timeouts.delete,
            config.poll_interval,
        )
        .await
        .map_err(|e| e.for_resource(id.clone()))
    }
}

/// Read a resource's property document; not-found is `Ok(None)`
async fn get_resource_properties(
    client: &CloudControlClient,
    type_name: &str,
    identifier: &str,
) -> ProviderResult<Option<serde_json::Value>> {
    let result = client
        .get_resource()
        .type_name(type_name)
        .identifier(identifier)
        .send()
        .await;

    match result {
        Ok(response) => {
            if let Some(description) = response.resource_description()
                && let Some(properties) = description.properties()
            {
                let properties: serde_json::Value = serde_json::from_str(properties)
                    .map_err(|e| {
                        ProviderError::new(format!("malformed resource properties: {}", e))
                    })?;
                Ok(Some(properties))
            } else {
                Ok(None)
            }
        }
        Err(e) => {
            if e.as_service_error()
                .is_some_and(|se| se.is_resource_not_found_exception())
            {
                Ok(None)
            } else {
                Err(ProviderError::new(format!("failed to get resource: {:?}", e)))
            }
        }
    }
}

// =============================================================================
// Validation / Document Building
// =============================================================================

/// Run schema type checks and validator chains over a declared resource
fn validate_with_config(config: &AwsSchemaConfig, resource: &Resource) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (name, attr_schema) in &config.schema.attributes {
        let path = AttributePath::root(name.clone());
        match resource.attributes.get(name.as_str()) {
            Some(Value::Null) | None if attr_schema.required => {
                diagnostics.push(Diagnostic::attribute_error(
                    path,
                    "Missing Required Attribute",
                    format!("\"{}\" must be set", name),
                ));
            }
            Some(value) => {
                if let Some(diag) = attr_schema.attr_type.check(&path, value) {
                    diagnostics.push(diag);
                    continue;
                }
                // First violation wins; later rules in the chain assume
                // the earlier ones hold
                for validator in config.validators_for(name) {
                    if let Some(diag) = validator.check(&path, value) {
                        diagnostics.push(diag);
                        break;
                    }
                }
            }
            None => {}
        }
    }

    let mut unknown: Vec<&String> = resource
        .attributes
        .keys()
        .filter(|k| config.schema.get(k).is_none())
        .collect();
    unknown.sort();
    for name in unknown {
        diagnostics.push(Diagnostic::attribute_error(
            AttributePath::root(name.clone()),
            "Unknown Attribute",
            format!(
                "\"{}\" is not a valid attribute for {}",
                name, config.schema.resource_type
            ),
        ));
    }

    diagnostics
}

fn configuration_error(id: &ResourceId, diagnostics: &[Diagnostic]) -> ProviderError {
    let details: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    ProviderError::new(format!("configuration is invalid: {}", details.join("; ")))
        .for_resource(id.clone())
}

/// Convert one declared attribute into its wire value
fn attribute_to_aws(
    config: &AwsSchemaConfig,
    dsl_name: &str,
    value: &Value,
) -> ProviderResult<Option<serde_json::Value>> {
    if config.is_json_document(dsl_name) {
        let Some(text) = value.as_str() else {
            return Ok(None);
        };
        let document: serde_json::Value = serde_json::from_str(text).map_err(|e| {
            ProviderError::new(format!("attribute {} is not valid JSON: {}", dsl_name, e))
        })?;
        Ok(Some(document))
    } else {
        Ok(value_to_json(value))
    }
}

/// Build the Cloud Control desired-state document for create
fn build_desired_state(
    config: &AwsSchemaConfig,
    resource: &Resource,
) -> ProviderResult<serde_json::Map<String, serde_json::Value>> {
    let mut desired_state = serde_json::Map::new();

    for (dsl_name, attr_schema) in &config.schema.attributes {
        if dsl_name.as_str() == "tags" {
            continue;
        }
        let Some(aws_name) = &attr_schema.provider_name else {
            continue;
        };
        let Some(value) = resource.attributes.get(dsl_name.as_str()) else {
            continue;
        };
        if let Some(aws_value) = attribute_to_aws(config, dsl_name, value)? {
            desired_state.insert(aws_name.clone(), aws_value);
        }
    }

    if config.has_tags {
        let tag_values = tags::expand_tags(resource.attributes.get("tags"));
        if !tag_values.is_empty() {
            desired_state.insert("Tags".to_string(), json!(tag_values));
        }
    }

    Ok(desired_state)
}

/// Build JSON-patch operations for the attributes that changed
fn build_patch_ops(
    config: &AwsSchemaConfig,
    from: &State,
    to: &Resource,
) -> ProviderResult<Vec<serde_json::Value>> {
    let mut patch_ops = Vec::new();

    for (dsl_name, attr_schema) in &config.schema.attributes {
        if dsl_name.as_str() == "tags" {
            continue;
        }
        let Some(aws_name) = &attr_schema.provider_name else {
            continue;
        };
        let next = to.attributes.get(dsl_name.as_str());
        let prior = from.attributes.get(dsl_name.as_str());
        if next == prior {
            continue;
        }
        match next {
            Some(value) => {
                if let Some(aws_value) = attribute_to_aws(config, dsl_name, value)? {
                    patch_ops.push(json!({
                        "op": "replace",
                        "path": format!("/{}", aws_name),
                        "value": aws_value
                    }));
                }
            }
            None => {
                patch_ops.push(json!({"op": "remove", "path": format!("/{}", aws_name)}));
            }
        }
    }

    if config.has_tags && to.attributes.get("tags") != from.attributes.get("tags") {
        let tag_values = tags::expand_tags(to.attributes.get("tags"));
        patch_ops.push(json!({"op": "replace", "path": "/Tags", "value": tag_values}));
    }

    Ok(patch_ops)
}

// =============================================================================
// Value Conversion
// =============================================================================

/// Convert a resource-property JSON value to a configuration value
fn json_to_value(value: &serde_json::Value) -> Option<Value> {
    match value {
        serde_json::Value::String(s) => Some(Value::String(s.clone())),
        serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Value::Int(i))
            } else {
                n.as_f64().map(|f| Value::Int(f as i64))
            }
        }
        serde_json::Value::Array(items) => {
            let items: Vec<Value> = items.iter().filter_map(json_to_value).collect();
            Some(Value::List(items))
        }
        serde_json::Value::Object(map) => {
            let map: HashMap<String, Value> = map
                .iter()
                .filter_map(|(k, v)| json_to_value(v).map(|v| (k.clone(), v)))
                .collect();
            Some(Value::Map(map))
        }
        serde_json::Value::Null => None,
    }
}

/// Convert a configuration value to a wire JSON value.
///
/// Null and not-yet-known values have no wire form and are omitted.
fn value_to_json(value: &Value) -> Option<serde_json::Value> {
    match value {
        Value::String(s) => Some(json!(s)),
        Value::Bool(b) => Some(json!(b)),
        Value::Int(i) => Some(json!(i)),
        Value::List(items) => {
            let items: Vec<serde_json::Value> = items.iter().filter_map(value_to_json).collect();
            Some(serde_json::Value::Array(items))
        }
        Value::Map(map) => {
            let map: serde_json::Map<String, serde_json::Value> = map
                .iter()
                .filter_map(|(k, v)| value_to_json(v).map(|v| (k.clone(), v)))
                .collect();
            Some(serde_json::Value::Object(map))
        }
        Value::Null | Value::Ref(_, _) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas;

    fn trail(name: &str) -> Resource {
        Resource::new("cloudtrail_trail", name)
            .with_attribute("trail_name", Value::String(name.to_string()))
            .with_attribute("s3_bucket_name", Value::String("audit-logs".to_string()))
            .with_attribute("is_logging", Value::Bool(true))
    }

    #[test]
    fn valid_trail_produces_no_diagnostics() {
        let config = schemas::get_schema_config("cloudtrail_trail").unwrap();
        assert_eq!(validate_with_config(&config, &trail("audit")), vec![]);
    }

    #[test]
    fn missing_required_attribute_is_reported() {
        let config = schemas::get_schema_config("cloudtrail_trail").unwrap();
        let mut resource = trail("audit");
        resource.attributes.remove("s3_bucket_name");

        let diagnostics = validate_with_config(&config, &resource);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].summary, "Missing Required Attribute");
        assert_eq!(diagnostics[0].path.to_string(), "s3_bucket_name");
    }

    #[test]
    fn explicit_null_counts_as_missing_for_required() {
        let config = schemas::get_schema_config("cloudtrail_trail").unwrap();
        let resource = trail("audit").with_attribute("s3_bucket_name", Value::Null);

        let diagnostics = validate_with_config(&config, &resource);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].summary, "Missing Required Attribute");
    }

    #[test]
    fn invalid_arn_is_reported_before_any_remote_call() {
        let config = schemas::get_schema_config("cloudtrail_trail").unwrap();
        let resource =
            trail("audit").with_attribute("kms_key_id", Value::String("not-an-arn".to_string()));

        let diagnostics = validate_with_config(&config, &resource);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].summary, "Invalid ARN");
        assert_eq!(diagnostics[0].path.to_string(), "kms_key_id");
    }

    #[test]
    fn unknown_value_skips_validators() {
        let config = schemas::get_schema_config("cloudtrail_trail").unwrap();
        let resource = trail("audit").with_attribute(
            "kms_key_id",
            Value::Ref("signing_key".to_string(), "arn".to_string()),
        );

        assert_eq!(validate_with_config(&config, &resource), vec![]);
    }

    #[test]
    fn unknown_attribute_is_reported() {
        let config = schemas::get_schema_config("cloudtrail_trail").unwrap();
        let resource = trail("audit").with_attribute("colour", Value::String("blue".to_string()));

        let diagnostics = validate_with_config(&config, &resource);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].summary, "Unknown Attribute");
    }

    #[test]
    fn desired_state_maps_provider_names() {
        let config = schemas::get_schema_config("cloudtrail_trail").unwrap();
        let resource = trail("audit");

        let document = build_desired_state(&config, &resource).unwrap();
        assert_eq!(document.get("TrailName"), Some(&json!("audit")));
        assert_eq!(document.get("S3BucketName"), Some(&json!("audit-logs")));
        assert_eq!(document.get("IsLogging"), Some(&json!(true)));
        assert!(!document.contains_key("S3KeyPrefix"));
    }

    #[test]
    fn desired_state_embeds_json_documents() {
        let config = schemas::get_schema_config("cloudtrail_trail").unwrap();
        let selectors = r#"[{"Name": "mgmt", "FieldSelectors": []}]"#;
        let resource = trail("audit")
            .with_attribute("advanced_event_selectors", Value::String(selectors.to_string()));

        let document = build_desired_state(&config, &resource).unwrap();
        // Embedded as a parsed array, not a string
        assert!(document.get("AdvancedEventSelectors").unwrap().is_array());
    }

    #[test]
    fn desired_state_expands_tags() {
        let config = schemas::get_schema_config("cloudtrail_trail").unwrap();
        let mut tag_map = HashMap::new();
        tag_map.insert("Env".to_string(), Value::String("prod".to_string()));
        let resource = trail("audit").with_attribute("tags", Value::Map(tag_map));

        let document = build_desired_state(&config, &resource).unwrap();
        assert_eq!(
            document.get("Tags"),
            Some(&json!([{"Key": "Env", "Value": "prod"}]))
        );
    }

    #[test]
    fn desired_state_omits_unknown_values() {
        let config = schemas::get_schema_config("cloudtrail_trail").unwrap();
        let resource = trail("audit").with_attribute(
            "kms_key_id",
            Value::Ref("signing_key".to_string(), "arn".to_string()),
        );

        let document = build_desired_state(&config, &resource).unwrap();
        assert!(!document.contains_key("KMSKeyId"));
    }

    #[test]
    fn patch_ops_cover_only_changed_attributes() {
        let config = schemas::get_schema_config("cloudtrail_trail").unwrap();
        let id = ResourceId::new("cloudtrail_trail", "audit");

        let mut prior_attrs = HashMap::new();
        prior_attrs.insert("trail_name".to_string(), Value::String("audit".to_string()));
        prior_attrs.insert(
            "s3_bucket_name".to_string(),
            Value::String("audit-logs".to_string()),
        );
        prior_attrs.insert("is_logging".to_string(), Value::Bool(true));
        prior_attrs.insert(
            "s3_key_prefix".to_string(),
            Value::String("old-prefix".to_string()),
        );
        let from = State::existing(id, prior_attrs);

        // is_logging flips, s3_key_prefix is dropped, the rest is unchanged
        let to = trail("audit").with_attribute("is_logging", Value::Bool(false));

        let mut ops = build_patch_ops(&config, &from, &to).unwrap();
        ops.sort_by_key(|op| op.get("path").unwrap().as_str().unwrap().to_string());

        assert_eq!(
            ops,
            vec![
                json!({"op": "replace", "path": "/IsLogging", "value": false}),
                json!({"op": "remove", "path": "/S3KeyPrefix"}),
            ]
        );
    }

    #[test]
    fn json_value_round_trip() {
        let json_value = json!({
            "Name": "api",
            "Port": 8080,
            "Public": true,
            "Subnets": ["a", "b"]
        });
        let value = json_to_value(&json_value).unwrap();
        assert_eq!(value_to_json(&value), Some(json_value));
    }
}
