//! Per-read state of a data source: explicit arguments, id and computed lists

use std::collections::BTreeMap;

use log::debug;
use serde_json::{Map, Value};

use super::projection::Record;
use super::schema::Schema;
use crate::error::{BrError, Result};

/// Arguments, id and computed attributes of a single data source read
#[derive(Debug, Clone)]
pub struct ResourceData {
    schema: Schema,
    arguments: BTreeMap<String, Value>,
    id: Option<String>,
    computed: BTreeMap<String, Vec<Record>>,
}

impl ResourceData {
    /// Create empty data for the given schema (no argument set)
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            arguments: BTreeMap::new(),
            id: None,
            computed: BTreeMap::new(),
        }
    }

    /// Create data from a configuration map, validating every entry
    pub fn from_config(schema: Schema, config: Map<String, Value>) -> Result<Self> {
        let mut data = Self::new(schema);
        for (key, value) in config {
            data.set_arg(&key, value)?;
        }
        Ok(data)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Set an argument explicitly
    pub fn set_arg(&mut self, key: &str, value: Value) -> Result<()> {
        self.schema.validate(key, &value)?;
        debug!("{}: argument {} = {}", self.schema.name, key, value);
        self.arguments.insert(key.to_string(), value);
        Ok(())
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.arguments
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.arguments.get(key).and_then(Value::as_bool)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.arguments.get(key).and_then(Value::as_i64)
    }

    pub fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        self.arguments.get(key).and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
    }

    /// Assign the identifier of this read
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Publish a computed list attribute
    pub fn set(&mut self, key: &str, records: Vec<Record>) -> Result<()> {
        if !self.schema.is_computed(key) {
            return Err(BrError::Config(format!(
                "{}: '{}' is not a computed attribute",
                self.schema.name, key
            )));
        }
        self.computed.insert(key.to_string(), records);
        Ok(())
    }

    /// Read back a computed list attribute
    pub fn get_computed(&self, key: &str) -> Option<&[Record]> {
        self.computed.get(key).map(Vec::as_slice)
    }

    /// Render the full state: id, explicit arguments and computed lists
    pub fn to_state(&self) -> Value {
        let mut state = Map::new();
        if let Some(id) = &self.id {
            state.insert("id".to_string(), Value::String(id.clone()));
        }
        for (key, value) in &self.arguments {
            state.insert(key.clone(), value.clone());
        }
        for (key, records) in &self.computed {
            state.insert(
                key.clone(),
                Value::Array(records.iter().cloned().map(Value::Object).collect()),
            );
        }
        Value::Object(state)
    }
}
