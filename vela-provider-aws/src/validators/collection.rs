//! Collection-level rules

use vela_core::diagnostic::{AttributePath, Diagnostic};
use vela_core::resource::Value;

/// Every element of a list value must be non-null. Not-yet-known elements
/// are skipped, not treated as violations.
pub(super) fn check_non_null_values(path: &AttributePath, value: &Value) -> Option<Diagnostic> {
    let Value::List(items) = value else {
        return Some(Diagnostic::attribute_error(
            path.clone(),
            "Invalid Type",
            format!("expected list, got {}", value.type_name()),
        ));
    };

    items
        .iter()
        .position(|item| item.is_null())
        .map(|index| {
            Diagnostic::attribute_error(
                path.clone().index(index),
                "Null Value",
                "list must not contain null values",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> AttributePath {
        AttributePath::root("attr")
    }

    #[test]
    fn test_check_non_null_values() {
        let ok = Value::List(vec![
            Value::String("a".to_string()),
            Value::Ref("db".to_string(), "arn".to_string()),
        ]);
        assert_eq!(check_non_null_values(&path(), &ok), None);

        let bad = Value::List(vec![
            Value::String("a".to_string()),
            Value::Null,
            Value::Null,
        ]);
        let diag = check_non_null_values(&path(), &bad).unwrap();
        assert_eq!(diag.path.to_string(), "attr[1]");
    }

    #[test]
    fn empty_list_is_valid() {
        assert_eq!(check_non_null_values(&path(), &Value::List(vec![])), None);
    }

    #[test]
    fn non_list_is_a_type_violation() {
        assert!(check_non_null_values(&path(), &Value::String("x".to_string())).is_some());
    }
}
