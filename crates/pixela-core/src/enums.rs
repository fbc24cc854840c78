use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Quantity type of a graph: whole numbers or floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphType {
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "float")]
    Float,
}

impl GraphType {
    /// Literal string the wire API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphType::Int => "int",
            GraphType::Float => "float",
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(GraphType::Int),
            "float" => Ok(GraphType::Float),
            other => Err(CoreError::InvalidInput(format!(
                "unknown graph type: {other}"
            ))),
        }
    }
}

/// Display color of a pixel. The service names its palette after plants
/// and skies; the doc comments give the plain color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphColor {
    /// Green
    #[serde(rename = "shibafu")]
    Shibafu,
    /// Red
    #[serde(rename = "momiji")]
    Momiji,
    /// Blue
    #[serde(rename = "sora")]
    Sora,
    /// Yellow
    #[serde(rename = "ichou")]
    Ichou,
    /// Purple
    #[serde(rename = "ajisai")]
    Ajisai,
    /// Black
    #[serde(rename = "kuro")]
    Kuro,
}

impl GraphColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphColor::Shibafu => "shibafu",
            GraphColor::Momiji => "momiji",
            GraphColor::Sora => "sora",
            GraphColor::Ichou => "ichou",
            GraphColor::Ajisai => "ajisai",
            GraphColor::Kuro => "kuro",
        }
    }
}

impl fmt::Display for GraphColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphColor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shibafu" => Ok(GraphColor::Shibafu),
            "momiji" => Ok(GraphColor::Momiji),
            "sora" => Ok(GraphColor::Sora),
            "ichou" => Ok(GraphColor::Ichou),
            "ajisai" => Ok(GraphColor::Ajisai),
            "kuro" => Ok(GraphColor::Kuro),
            other => Err(CoreError::InvalidInput(format!(
                "unknown graph color: {other}"
            ))),
        }
    }
}

/// Self-sufficiency mode: whether viewing the SVG adjusts the graph's own
/// pixel count for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelfSufficiency {
    #[serde(rename = "increment")]
    Increment,
    #[serde(rename = "decrement")]
    Decrement,
    #[serde(rename = "none")]
    None,
}

impl SelfSufficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelfSufficiency::Increment => "increment",
            SelfSufficiency::Decrement => "decrement",
            SelfSufficiency::None => "none",
        }
    }
}

impl fmt::Display for SelfSufficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelfSufficiency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increment" => Ok(SelfSufficiency::Increment),
            "decrement" => Ok(SelfSufficiency::Decrement),
            "none" => Ok(SelfSufficiency::None),
            other => Err(CoreError::InvalidInput(format!(
                "unknown self-sufficiency mode: {other}"
            ))),
        }
    }
}
