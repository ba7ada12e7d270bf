//! Shape-related types and error definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when serving shapes
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid stored geometry for shape {id}: {source}")]
    InvalidGeometry {
        id: i32,
        #[source]
        source: serde_json::Error,
    },
}

/// A single position as stored in GeoJSON: `[longitude, latitude]`.
/// Numbers stay as parsed so the stored representation round-trips
/// untouched (`10` serializes as `10`, not `10.0`).
pub type Position = [serde_json::Number; 2];

/// GeoJSON geometry, tagged by its `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
}

/// A GeoJSON feature wrapping one stored shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureType,
    pub properties: ShapeProperties,
    pub geometry: Geometry,
}

/// The constant `"Feature"` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    Feature,
}

/// Properties carried by every shape feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeProperties {
    pub id: i32,
    pub name: String,
}

/// A GeoJSON feature collection, rebuilt per request from the shapes table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: FeatureCollectionType,
    pub features: Vec<Feature>,
}

/// The constant `"FeatureCollection"` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureCollectionType {
    FeatureCollection,
}

/// A raw row from the shapes table, geometry as `ST_AsGeoJSON` text
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShapeRow {
    pub id: i32,
    pub name: String,
    pub geometry: String,
}

impl ShapeRow {
    /// Parse the stored geometry text and wrap the row as a GeoJSON feature
    pub fn into_feature(self) -> Result<Feature, ShapeError> {
        let geometry = serde_json::from_str(&self.geometry)
            .map_err(|source| ShapeError::InvalidGeometry { id: self.id, source })?;
        Ok(Feature {
            kind: FeatureType::Feature,
            properties: ShapeProperties {
                id: self.id,
                name: self.name,
            },
            geometry,
        })
    }
}

impl FeatureCollection {
    /// Build a collection from raw shape rows, preserving row order
    pub fn from_rows(rows: Vec<ShapeRow>) -> Result<Self, ShapeError> {
        let features = rows
            .into_iter()
            .map(ShapeRow::into_feature)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            kind: FeatureCollectionType::FeatureCollection,
            features,
        })
    }
}
