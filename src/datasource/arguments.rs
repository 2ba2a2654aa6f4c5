//! Loading data source arguments from a configuration file

use log::debug;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{BrError, Result};

/// Read a JSON or YAML file holding a single object of arguments
///
/// Files ending in `.yaml` or `.yml` are parsed as YAML, everything else as
/// JSON. Values are checked against the schema later, when the arguments
/// are loaded into a [`ResourceData`](super::ResourceData).
pub fn load_arguments(path: &Path) -> Result<Map<String, Value>> {
    debug!("Loading arguments from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        BrError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let value: Value = if is_yaml {
        serde_yml::from_str(&content).map_err(|e| {
            BrError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| {
            BrError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?
    };

    match value {
        Value::Object(map) => Ok(map),
        // An empty YAML document
        Value::Null => Ok(Map::new()),
        other => Err(BrError::Config(format!(
            "{} must contain an object of arguments, found {}",
            path.display(),
            kind_name(&other)
        ))),
    }
}

/// Merge arguments from an optional file with flags; flags win
pub fn merge_arguments(
    config: Option<&Path>,
    flags: Vec<(&'static str, Value)>,
) -> Result<Map<String, Value>> {
    let mut arguments = match config {
        Some(path) => load_arguments(path)?,
        None => Map::new(),
    };
    for (name, value) in flags {
        if arguments.insert(name.to_string(), value).is_some() {
            debug!("Flag --{} overrides the configuration file", name.replace('_', "-"));
        }
    }
    Ok(arguments)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::Builder;

    fn write_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_json() {
        let file = write_file(".json", r#"{"ids": ["a", "b"], "include_stats": false}"#);
        let args = load_arguments(file.path()).unwrap();
        assert_eq!(args["ids"], json!(["a", "b"]));
        assert_eq!(args["include_stats"], json!(false));
    }

    #[test]
    fn test_load_yaml() {
        let file = write_file(
            ".yaml",
            "status:\n  - Running\n  - Failed\nstart_time_usecs: 1700000000000000\n",
        );
        let args = load_arguments(file.path()).unwrap();
        assert_eq!(args["status"], json!(["Running", "Failed"]));
        assert_eq!(args["start_time_usecs"], json!(1700000000000000i64));
    }

    #[test]
    fn test_load_empty_yaml() {
        let file = write_file(".yml", "");
        assert!(load_arguments(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_rejects_non_object() {
        let file = write_file(".json", r#"["ids"]"#);
        let err = load_arguments(file.path()).unwrap_err();
        assert!(err.to_string().contains("a list"));
    }

    #[test]
    fn test_load_invalid_json() {
        let file = write_file(".json", "{not json");
        let err = load_arguments(file.path()).unwrap_err();
        assert!(matches!(err, BrError::Config(_)));
    }

    #[test]
    fn test_merge_flags_override_file() {
        let file = write_file(".json", r#"{"ids": ["a"], "include_stats": true}"#);
        let merged = merge_arguments(
            Some(file.path()),
            vec![("include_stats", json!(false)), ("types", json!(["Regular"]))],
        )
        .unwrap();
        assert_eq!(merged["ids"], json!(["a"]));
        assert_eq!(merged["include_stats"], json!(false));
        assert_eq!(merged["types"], json!(["Regular"]));
    }

    #[test]
    fn test_merge_without_file() {
        let merged = merge_arguments(None, vec![("ids", json!(["x"]))]).unwrap();
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_arguments(Path::new("/nonexistent/brctl-args.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
