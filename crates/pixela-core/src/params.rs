use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::dates;

/// Conditionally-populated parameter set for a single request.
///
/// Keys exist only when the caller supplied a value; `None` and blank
/// strings never serialize. Mutating requests send the set as a JSON
/// body, GET requests send it as query pairs.
#[derive(Debug, Clone, Default)]
pub struct Params {
    inner: Map<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a required value.
    pub fn insert(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.inner.insert(key.to_string(), value.into());
        self
    }

    /// Insert a string only when it is present and not blank.
    pub fn insert_opt_str(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(v) = value {
            if !v.trim().is_empty() {
                self.inner.insert(key.to_string(), Value::from(v));
            }
        }
        self
    }

    /// Insert a value only when it is present.
    pub fn insert_opt(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(v) => self.insert(key, v),
            None => self,
        }
    }

    /// Insert a calendar date in wire format.
    pub fn insert_date(self, key: &str, date: NaiveDate) -> Self {
        self.insert(key, dates::format_wire_date(date))
    }

    /// Insert a calendar date only when it is present.
    pub fn insert_opt_date(self, key: &str, date: Option<NaiveDate>) -> Self {
        match date {
            Some(d) => self.insert_date(key, d),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// JSON object form, used as a request body.
    pub fn into_body(self) -> Value {
        Value::Object(self.inner)
    }

    /// Flat string pairs, used as a query string.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.inner
            .iter()
            .map(|(k, v)| {
                let rendered = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), rendered)
            })
            .collect()
    }
}
