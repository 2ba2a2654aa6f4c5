//! Projection of typed API records into schema-shaped trees
//!
//! The published tree follows the data source schema conventions:
//!
//! - absent optional fields are omitted, never written as null or zero
//! - a nested object becomes a list holding exactly that one block
//! - a list of objects keeps its order, each element shaped the same way
//! - scalars and lists of scalars are copied as they are
//!
//! Serialization of the typed record is the only step that can fail.
//! Shaping the serialized tree is infallible.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{BrError, Result};

/// One projected record
pub type Record = Map<String, Value>;

/// Project a single typed record
pub fn project<T: Serialize>(item: &T) -> Result<Record> {
    match serde_json::to_value(item) {
        Ok(Value::Object(fields)) => Ok(shape_object(fields)),
        Ok(other) => Err(BrError::Projection(format!(
            "expected an object, got {}",
            kind_of(&other)
        ))),
        Err(e) => Err(BrError::Projection(e.to_string())),
    }
}

/// Project every record in order, stopping at the first failure
pub fn project_all<T: Serialize>(items: &[T]) -> Result<Vec<Record>> {
    items.iter().map(project).collect()
}

fn shape_object(fields: Map<String, Value>) -> Record {
    fields
        .into_iter()
        .filter_map(|(key, value)| shape_value(value).map(|v| (key, v)))
        .collect()
}

fn shape_value(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(fields) => Some(Value::Array(vec![Value::Object(shape_object(fields))])),
        Value::Array(items) => Some(Value::Array(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(fields) => Some(Value::Object(shape_object(fields))),
                    Value::Null => None,
                    scalar => Some(scalar),
                })
                .collect(),
        )),
        scalar => Some(scalar),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Inner {
        unit: String,
        frequency: Option<i64>,
    }

    #[derive(Serialize)]
    struct Outer {
        name: String,
        description: Option<String>,
        inner: Option<Inner>,
        items: Option<Vec<Inner>>,
        tags: Vec<String>,
    }

    fn sample() -> Outer {
        Outer {
            name: "gold".to_string(),
            description: None,
            inner: Some(Inner {
                unit: "Days".to_string(),
                frequency: None,
            }),
            items: Some(vec![
                Inner {
                    unit: "Weeks".to_string(),
                    frequency: Some(1),
                },
                Inner {
                    unit: "Months".to_string(),
                    frequency: Some(2),
                },
            ]),
            tags: vec!["b".to_string(), "a".to_string()],
        }
    }

    #[test]
    fn test_absent_fields_omitted() {
        let record = project(&sample()).unwrap();
        assert!(!record.contains_key("description"));
        let inner = &record["inner"][0];
        assert!(inner.get("frequency").is_none());
    }

    #[test]
    fn test_nested_object_wrapped_in_single_element_list() {
        let record = project(&sample()).unwrap();
        assert_eq!(record["inner"], json!([{"unit": "Days"}]));
    }

    #[test]
    fn test_list_order_preserved() {
        let record = project(&sample()).unwrap();
        assert_eq!(
            record["items"],
            json!([
                {"unit": "Weeks", "frequency": 1},
                {"unit": "Months", "frequency": 2}
            ])
        );
        assert_eq!(record["tags"], json!(["b", "a"]));
    }

    #[test]
    fn test_empty_list_kept() {
        let mut outer = sample();
        outer.items = Some(vec![]);
        let record = project(&outer).unwrap();
        assert_eq!(record["items"], json!([]));
    }

    #[test]
    fn test_projection_idempotent() {
        let outer = sample();
        assert_eq!(project(&outer).unwrap(), project(&outer).unwrap());
    }

    #[test]
    fn test_non_object_fails() {
        let err = project(&"just a string").unwrap_err();
        match err {
            BrError::Projection(msg) => assert!(msg.contains("string")),
            _ => panic!("Expected BrError::Projection"),
        }
    }

    #[test]
    fn test_project_all_stops_on_first_failure() {
        let items = vec![json!({"a": 1}), json!(2), json!({"b": 3})];
        assert!(project_all(&items).is_err());
    }

    #[test]
    fn test_project_all_keeps_order() {
        let items = vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3})];
        let records = project_all(&items).unwrap();
        let order: Vec<_> = records.iter().map(|r| r["n"].clone()).collect();
        assert_eq!(order, vec![json!(1), json!(2), json!(3)]);
    }
}
