use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dates;
use crate::enums::{GraphColor, GraphType, SelfSufficiency};
use crate::errors::{CoreError, Result};
use crate::params::Params;

/// A pixelation graph definition as the service reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    pub id: String,
    pub name: String,
    pub unit: String,
    #[serde(rename = "type")]
    pub graph_type: GraphType,
    pub color: GraphColor,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(rename = "selfSufficient", default)]
    pub self_sufficient: Option<SelfSufficiency>,
    #[serde(rename = "purgeCacheURLs", default)]
    pub purge_cache_urls: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>, // Catch unknown fields
}

/// One day's recorded quantity. The day itself travels in the request
/// path, so the wire shape carries only the value and its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pixel {
    /// Quantity in its textual wire form.
    pub quantity: String,
    #[serde(rename = "optionalData", default)]
    pub optional_data: Option<String>,
}

impl Pixel {
    /// Quantity parsed out of its wire string.
    pub fn numeric_quantity(&self) -> Result<f64> {
        self.quantity.parse().map_err(|_| {
            CoreError::InvalidInput(format!("quantity is not numeric: {}", self.quantity))
        })
    }
}

/// Read-only aggregate statistics of a graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    #[serde(rename = "totalPixelsCount")]
    pub total_pixels_count: i64,
    #[serde(rename = "maxQuantity")]
    pub max_quantity: f64,
    #[serde(rename = "minQuantity")]
    pub min_quantity: f64,
    #[serde(rename = "totalQuantity")]
    pub total_quantity: f64,
    #[serde(rename = "avgQuantity")]
    pub avg_quantity: f64,
    #[serde(rename = "todaysQuantity")]
    pub todays_quantity: f64,
}

/// Generic response envelope shared by most endpoints.
///
/// Resource-specific payloads (`graphs`, `pixels`) arrive as extension
/// fields rather than modeled attributes; the typed accessors below
/// decode them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "isSuccess", default = "default_is_success")]
    pub is_success: bool,

    #[serde(flatten)]
    pub extends: HashMap<String, Value>, // Catch resource-specific fields
}

// List-style responses omit the flag entirely; they are only delivered
// on a 2xx status.
fn default_is_success() -> bool {
    true
}

impl ApiResponse {
    fn extension(&self, key: &str) -> Result<&Value> {
        self.extends
            .get(key)
            .ok_or_else(|| CoreError::MissingField(key.to_string()))
    }

    /// Graph definitions carried in the `graphs` extension field.
    pub fn graphs(&self) -> Result<Vec<Graph>> {
        let graphs = serde_json::from_value(self.extension("graphs")?.clone())?;
        Ok(graphs)
    }

    /// Pixel dates carried in the `pixels` extension field, parsed out
    /// of their wire form.
    pub fn pixel_dates(&self) -> Result<Vec<NaiveDate>> {
        let raw: Vec<String> = serde_json::from_value(self.extension("pixels")?.clone())?;
        raw.iter().map(|s| dates::parse_wire_date(s)).collect()
    }
}

/// Numeric quantity recorded on a pixel.
///
/// The service accepts whole or floating quantities; both travel as
/// their textual representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Int(v) => write!(f, "{v}"),
            Quantity::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Quantity {
    fn from(v: i64) -> Self {
        Quantity::Int(v)
    }
}

impl From<i32> for Quantity {
    fn from(v: i32) -> Self {
        Quantity::Int(v.into())
    }
}

impl From<f64> for Quantity {
    fn from(v: f64) -> Self {
        Quantity::Float(v)
    }
}

impl From<f32> for Quantity {
    fn from(v: f32) -> Self {
        Quantity::Float(v.into())
    }
}

/// Field subset accepted by a graph update; absent fields are left
/// untouched server-side.
#[derive(Debug, Clone, Default)]
pub struct GraphUpdate {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub color: Option<GraphColor>,
    pub timezone: Option<String>,
    pub purge_cache_urls: Option<Vec<String>>,
    pub self_sufficient: Option<SelfSufficiency>,
}

impl GraphUpdate {
    /// Parameter set containing only the present fields.
    pub fn params(&self) -> Params {
        Params::new()
            .insert_opt_str("name", self.name.as_deref())
            .insert_opt_str("unit", self.unit.as_deref())
            .insert_opt("color", self.color.map(|c| c.as_str()))
            .insert_opt_str("timezone", self.timezone.as_deref())
            .insert_opt("purgeCacheURLs", self.purge_cache_urls.clone())
            .insert_opt("selfSufficient", self.self_sufficient.map(|s| s.as_str()))
    }
}
