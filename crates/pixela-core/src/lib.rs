//! # Pixela Core
//!
//! Domain types for the Pixela pixelation-tracking service.
//!
//! This crate contains pure wire-contract logic with no I/O dependencies:
//! - Wire enums and their string mapping
//! - Data models and the generic response envelope
//! - Calendar-date formatting (`yyyyMMdd`, no time-of-day, no zone)
//! - Conditional parameter building
//!
//! ## Design Principles
//!
//! - **Pure Functions**: No side effects, easy to test
//! - **Wire-Faithful**: Models exactly what the service sends and accepts
//! - **Dependency-Free**: No networking or persistence dependencies

pub mod dates;
pub mod enums;
pub mod errors;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use enums::{GraphColor, GraphType, SelfSufficiency};
pub use errors::{CoreError, Result};
pub use models::{ApiResponse, Graph, GraphStats, GraphUpdate, Pixel, Quantity};
pub use params::Params;
