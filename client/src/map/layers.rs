//! Static map layers and feature partitioning

use geoview_server::shapes::{Feature, FeatureCollection, FeatureCollectionType, Geometry};

use super::state::LatLon;

/// A hand-coded region outline drawn over the base map
#[derive(Debug, Clone, Copy)]
pub struct RegionPolygon {
    pub name: &'static str,
    pub color: &'static str,
    /// Outline vertices in display order (lat, lon)
    pub ring: &'static [LatLon],
}

/// Fixed region outlines
pub const REGION_POLYGONS: &[RegionPolygon] = &[
    RegionPolygon {
        name: "Kairouan",
        color: "red",
        ring: &[
            LatLon::new(35.6784, 10.0963),
            LatLon::new(35.6784, 10.1963),
            LatLon::new(35.7784, 10.1963),
            LatLon::new(35.7784, 10.0963),
        ],
    },
    RegionPolygon {
        name: "Sousse",
        color: "green",
        ring: &[
            LatLon::new(35.8245, 10.537),
            LatLon::new(35.8245, 10.637),
            LatLon::new(35.9245, 10.637),
            LatLon::new(35.9245, 10.537),
        ],
    },
    RegionPolygon {
        name: "Beja",
        color: "blue",
        ring: &[
            LatLon::new(36.7256, 9.1528),
            LatLon::new(36.7256, 9.2528),
            LatLon::new(36.8256, 9.2528),
            LatLon::new(36.8256, 9.1528),
        ],
    },
    RegionPolygon {
        name: "Tunis-Bizerte-Hammamet",
        color: "purple",
        ring: &[
            LatLon::new(36.8065, 10.1815),
            LatLon::new(37.0194, 9.6662),
            LatLon::new(36.4335, 10.6956),
        ],
    },
    RegionPolygon {
        name: "Tozeur-Kebili-Gabes-Gafsa",
        color: "orange",
        ring: &[
            LatLon::new(33.9197, 8.1336),
            LatLon::new(33.306445, 9.058228),
            LatLon::new(33.8881, 10.0975),
            LatLon::new(34.4311, 8.7861),
        ],
    },
];

/// A fixed city marker
#[derive(Debug, Clone, Copy)]
pub struct CityMarker {
    pub name: &'static str,
    pub position: LatLon,
}

/// Extra city markers drawn alongside the fetched shapes
pub const CITY_MARKERS: &[CityMarker] = &[
    CityMarker {
        name: "Sfax",
        position: LatLon::new(34.7406, 10.76),
    },
    CityMarker {
        name: "Mahdia",
        position: LatLon::new(35.5047, 11.0622),
    },
    CityMarker {
        name: "Le Kef",
        position: LatLon::new(36.168, 8.7096),
    },
];

/// Fetched shapes split by geometry kind
#[derive(Debug, Clone)]
pub struct MapLayers {
    /// Polygon features, rendered through the generic GeoJSON layer
    pub polygons: FeatureCollection,
    /// Point features, rendered as markers with the name as popup
    pub markers: Vec<Feature>,
}

impl MapLayers {
    /// Display position for a point marker (GeoJSON stores lon, lat)
    pub fn marker_position(feature: &Feature) -> Option<LatLon> {
        match &feature.geometry {
            Geometry::Point { coordinates } => Some(LatLon::new(
                coordinates[1].as_f64()?,
                coordinates[0].as_f64()?,
            )),
            _ => None,
        }
    }
}

/// Split a fetched FeatureCollection into polygon and marker layers.
/// Only `Polygon` and `Point` features are kept.
pub fn partition(collection: FeatureCollection) -> MapLayers {
    let mut polygons = Vec::new();
    let mut markers = Vec::new();

    for feature in collection.features {
        match feature.geometry {
            Geometry::Polygon { .. } => polygons.push(feature),
            Geometry::Point { .. } => markers.push(feature),
            _ => {}
        }
    }

    MapLayers {
        polygons: FeatureCollection {
            kind: FeatureCollectionType::FeatureCollection,
            features: polygons,
        },
        markers,
    }
}
