//! Resource - Representing resources and their state

use std::collections::HashMap;

/// Unique identifier for a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    /// Resource type (e.g., "apprunner_service", "cloudtrail_trail")
    pub resource_type: String,
    /// Resource name (identifier given in the configuration)
    pub name: String,
}

impl ResourceId {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.resource_type, self.name)
    }
}

/// Attribute value of a resource
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
    /// Explicitly configured as empty
    Null,
    /// Reference to another resource's attribute (binding_name, attribute_name).
    /// The referenced value is not known until that resource has been applied.
    Ref(String, String),
}

impl Value {
    /// Whether this value is not yet known (an unresolved reference).
    ///
    /// Unknown values are skipped by validation: they cannot be checked
    /// until the referenced resource has been created.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Ref(_, _))
    }

    /// Whether this value is explicitly null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The string contents, if this is a concrete string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Human-readable type name, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Null => "null",
            Value::Ref(_, _) => "reference",
        }
    }
}

/// Desired state declared in the configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: ResourceId,
    pub attributes: HashMap<String, Value>,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ResourceId::new(resource_type, name),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// Current state fetched from actual infrastructure
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub id: ResourceId,
    /// Cloud-side identifier (e.g., a service ARN or vpc-xxx)
    pub identifier: Option<String>,
    pub attributes: HashMap<String, Value>,
    /// Whether this state exists
    pub exists: bool,
}

impl State {
    pub fn not_found(id: ResourceId) -> Self {
        Self {
            id,
            identifier: None,
            attributes: HashMap::new(),
            exists: false,
        }
    }

    pub fn existing(id: ResourceId, attributes: HashMap<String, Value>) -> Self {
        Self {
            id,
            identifier: None,
            attributes,
            exists: true,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_id_display() {
        let id = ResourceId::new("apprunner_service", "api");
        assert_eq!(id.to_string(), "apprunner_service.api");
    }

    #[test]
    fn ref_value_is_unknown() {
        let v = Value::Ref("vpc".to_string(), "id".to_string());
        assert!(v.is_unknown());
        assert!(!Value::String("vpc-123".to_string()).is_unknown());
    }

    #[test]
    fn state_constructors() {
        let id = ResourceId::new("ec2_vpc", "main");
        let state = State::not_found(id.clone());
        assert!(!state.exists);

        let state = State::existing(id, HashMap::new()).with_identifier("vpc-abc");
        assert!(state.exists);
        assert_eq!(state.identifier.as_deref(), Some("vpc-abc"));
    }
}
