//! Row-backed wrapped objects

use crate::error::{PresenterError, PresenterResult};
use crate::wrapped::{no_args, Association, Wrapped};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Computed method on a record, e.g. `initials`
pub type RecordMethod = Arc<dyn Fn(&Record, &[Value]) -> PresenterResult<Value> + Send + Sync>;

/// One model row: ordered column values, computed methods and associations.
///
/// Column names answer as zero-argument methods. Computed methods are
/// consulted after columns.
#[derive(Clone)]
pub struct Record {
    model: String,
    values: IndexMap<String, Value>,
    methods: HashMap<String, RecordMethod>,
    associations: HashMap<String, Association>,
}

impl Record {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            values: IndexMap::new(),
            methods: HashMap::new(),
            associations: HashMap::new(),
        }
    }

    /// Build from a JSON object of column values
    pub fn from_json(model: impl Into<String>, row: Value) -> PresenterResult<Self> {
        let model = model.into();
        match row {
            Value::Object(columns) => Ok(columns
                .into_iter()
                .fold(Self::new(model), |record, (column, value)| {
                    record.with_value(column, value)
                })),
            other => Err(PresenterError::invalid_arguments(
                "from_json",
                format!("expected a JSON object for {model}, got {other}"),
            )),
        }
    }

    pub fn with_value(mut self, column: impl Into<String>, value: Value) -> Self {
        self.values.insert(column.into(), value);
        self
    }

    pub fn with_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&Record, &[Value]) -> PresenterResult<Value> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(method));
        self
    }

    pub fn with_association(mut self, name: impl Into<String>, association: Association) -> Self {
        self.associations.insert(name.into(), association);
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Column value as a string, empty when missing or not a string
    pub fn get_str(&self, column: &str) -> &str {
        self.get(column).and_then(Value::as_str).unwrap_or_default()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl Wrapped for Record {
    fn type_name(&self) -> &str {
        &self.model
    }

    fn call(&self, method: &str, args: &[Value]) -> PresenterResult<Value> {
        if let Some(value) = self.values.get(method) {
            no_args(method, args)?;
            return Ok(value.clone());
        }
        match self.methods.get(method) {
            Some(computed) => computed(self, args),
            None => Err(PresenterError::method_not_found(&self.model, method)),
        }
    }

    fn association(&self, name: &str) -> PresenterResult<Association> {
        self.associations
            .get(name)
            .cloned()
            .ok_or_else(|| PresenterError::method_not_found(&self.model, name))
    }

    fn to_json(&self) -> Value {
        Value::Object(self.values.clone().into_iter().collect())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("model", &self.model)
            .field("values", &self.values)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .field("associations", &self.associations.keys().collect::<Vec<_>>())
            .finish()
    }
}
