//! # Pixela API
//!
//! HTTP client for the Pixela pixelation-tracking service.
//! This crate provides typed resource clients for graph definitions and
//! daily pixel records, plus the transport layer they share.

pub mod client;
pub mod errors;
pub mod graphs;
pub mod pixel;
pub mod sdk;

// Re-export common types for convenience
pub use client::{ClientConfig, PixelaClient, DEFAULT_BASE_URL};
pub use errors::{ApiError, HttpError, Result};
pub use graphs::GraphsClient;
pub use pixel::PixelClient;
pub use sdk::Pixela;

// Re-export core types that API consumers will need
pub use pixela_core::{
    ApiResponse, CoreError, Graph, GraphColor, GraphStats, GraphType, GraphUpdate, Params, Pixel,
    Quantity, SelfSufficiency,
};
