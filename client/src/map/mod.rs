//! Map view module
//!
//! This module provides:
//! - `MapView` transient state (selection, user location, clicked position)
//! - center/zoom resolution for the rendered viewport
//! - static region polygons and city markers
//! - partitioning of the fetched FeatureCollection into layers

pub mod layers;
mod state;

pub use layers::{CITY_MARKERS, CityMarker, MapLayers, REGION_POLYGONS, RegionPolygon, partition};
pub use state::{
    ClickedPlace, DEFAULT_CENTER, DEFAULT_ZOOM, FOCUS_ZOOM, LatLon, MapView, Viewport,
};
