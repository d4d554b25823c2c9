//! Schema - Define type schemas for resources
//!
//! Providers define schemas for each resource type, enabling shallow type
//! checking of declared attribute values before provider-specific
//! validators run.

use std::collections::BTreeMap;

use crate::diagnostic::{AttributePath, Diagnostic};
use crate::resource::Value;

/// Attribute type
#[derive(Debug, Clone)]
pub enum AttributeType {
    String,
    Int,
    Bool,
    /// Enum (list of allowed values)
    Enum(Vec<String>),
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
}

impl AttributeType {
    /// Human-readable name, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Int => "int",
            AttributeType::Bool => "bool",
            AttributeType::Enum(_) => "enum",
            AttributeType::List(_) => "list",
            AttributeType::Map(_) => "map",
        }
    }

    /// Check that a value conforms to this type.
    ///
    /// Null and not-yet-known values are accepted unconditionally; they
    /// carry no shape to check. Returns at most one diagnostic, for the
    /// first mismatch found.
    pub fn check(&self, path: &AttributePath, value: &Value) -> Option<Diagnostic> {
        if value.is_null() || value.is_unknown() {
            return None;
        }

        match (self, value) {
            (AttributeType::String, Value::String(_)) => None,
            (AttributeType::Int, Value::Int(_)) => None,
            (AttributeType::Bool, Value::Bool(_)) => None,

            (AttributeType::Enum(variants), Value::String(s)) => {
                if variants.iter().any(|v| v == s) {
                    None
                } else {
                    Some(Diagnostic::attribute_error(
                        path.clone(),
                        "Invalid Value",
                        format!(
                            "value must be one of [{}], got \"{}\"",
                            variants.join(", "),
                            s
                        ),
                    ))
                }
            }

            (AttributeType::List(inner), Value::List(items)) => items
                .iter()
                .enumerate()
                .find_map(|(i, item)| inner.check(&path.clone().index(i), item)),

            (AttributeType::Map(inner), Value::Map(map)) => {
                // BTreeMap ordering keeps the reported key deterministic
                let ordered: BTreeMap<_, _> = map.iter().collect();
                ordered
                    .into_iter()
                    .find_map(|(k, v)| inner.check(&path.clone().attribute(k.clone()), v))
            }

            _ => Some(Diagnostic::attribute_error(
                path.clone(),
                "Invalid Type",
                format!(
                    "expected {}, got {}",
                    self.type_name(),
                    value.type_name()
                ),
            )),
        }
    }
}

/// Schema for a single attribute
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub description: Option<String>,
    /// Attribute name on the provider's wire format (e.g., "ServiceName")
    pub provider_name: Option<String>,
    /// Whether this attribute must be set for create
    pub required: bool,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            description: None,
            provider_name: None,
            required: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_provider_name(mut self, provider_name: impl Into<String>) -> Self {
        self.provider_name = Some(provider_name.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Schema for a resource type
#[derive(Debug, Clone, Default)]
pub struct ResourceSchema {
    pub resource_type: String,
    pub description: Option<String>,
    pub attributes: BTreeMap<String, AttributeSchema>,
}

impl ResourceSchema {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            description: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn attribute(mut self, attribute: AttributeSchema) -> Self {
        self.attributes.insert(attribute.name.clone(), attribute);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.get(name)
    }
}
