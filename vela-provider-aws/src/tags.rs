//! Tag conversion between configuration maps and the Cloud Control
//! `[{Key, Value}]` wire form

use std::collections::HashMap;

use serde_json::json;
use vela_core::resource::Value;

/// Build the tags array for a desired-state document
pub fn expand_tags(user_tags: Option<&Value>) -> Vec<serde_json::Value> {
    let mut tags = Vec::new();
    if let Some(Value::Map(user_tags)) = user_tags {
        let mut keys: Vec<&String> = user_tags.keys().collect();
        keys.sort();
        for key in keys {
            if let Some(Value::String(v)) = user_tags.get(key) {
                tags.push(json!({"Key": key, "Value": v}));
            }
        }
    }
    tags
}

/// Parse a tags array from resource properties back into a map
pub fn flatten_tags(tags_array: &[serde_json::Value]) -> HashMap<String, Value> {
    let mut tags_map = HashMap::new();
    for tag in tags_array {
        if let (Some(key), Some(value)) = (
            tag.get("Key").and_then(|v| v.as_str()),
            tag.get("Value").and_then(|v| v.as_str()),
        ) {
            tags_map.insert(key.to_string(), Value::String(value.to_string()));
        }
    }
    tags_map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tags() {
        let mut map = HashMap::new();
        map.insert("Name".to_string(), Value::String("api".to_string()));
        map.insert("Env".to_string(), Value::String("prod".to_string()));
        let tags = expand_tags(Some(&Value::Map(map)));

        // Sorted by key for a deterministic document
        assert_eq!(tags[0], json!({"Key": "Env", "Value": "prod"}));
        assert_eq!(tags[1], json!({"Key": "Name", "Value": "api"}));
    }

    #[test]
    fn expand_tags_ignores_non_string_values() {
        let mut map = HashMap::new();
        map.insert("Count".to_string(), Value::Int(3));
        assert!(expand_tags(Some(&Value::Map(map))).is_empty());
        assert!(expand_tags(None).is_empty());
    }

    #[test]
    fn test_flatten_tags() {
        let array = vec![
            json!({"Key": "Name", "Value": "api"}),
            json!({"Key": "Env", "Value": "prod"}),
            json!({"NotATag": true}),
        ];
        let map = flatten_tags(&array);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Name"), Some(&Value::String("api".to_string())));
    }

    #[test]
    fn tags_round_trip() {
        let mut map = HashMap::new();
        map.insert("Name".to_string(), Value::String("api".to_string()));
        let expanded = expand_tags(Some(&Value::Map(map.clone())));
        assert_eq!(flatten_tags(&expanded), map);
    }
}
