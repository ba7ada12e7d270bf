//! Shapes module: the geometry service proper
//!
//! This module provides:
//! - GeoJSON wire types (`Feature`, `FeatureCollection`, `Geometry`)
//! - `ShapeService` trait for abstracting the spatial store
//! - `PgShapeService` reading from PostGIS
//! - HTTP routes serving shapes and the database check

pub mod routes;
mod service;
mod types;

pub use routes::{ShapeAppState, ShapeErrorResponse, shape_routes};
pub use service::{PgShapeService, ShapeService};
pub use types::{
    Feature, FeatureCollection, FeatureCollectionType, FeatureType, Geometry, Position,
    ShapeError, ShapeProperties, ShapeRow,
};
