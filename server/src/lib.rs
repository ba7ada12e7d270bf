//! GeoView Server Library
//!
//! This module exports the server components for use in integration tests,
//! the map client, and external tooling.

pub mod config;
pub mod shapes;

// Re-export commonly used types
pub use config::Config;
pub use shapes::{Feature, FeatureCollection, Geometry, ShapeAppState, shape_routes};
