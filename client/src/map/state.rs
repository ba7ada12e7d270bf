//! Transient map view state and viewport resolution

use crate::geocode::{Geocoder, Place, UNKNOWN_PLACE};
use crate::location::{GEOLOCATION_ERROR_MESSAGE, LocationProvider};

/// A latitude/longitude pair in display order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Country-wide default center
pub const DEFAULT_CENTER: LatLon = LatLon::new(33.8869, 9.5375);

/// Zoom when nothing is selected
pub const DEFAULT_ZOOM: u8 = 6;

/// Zoom when focused on a selected or located position
pub const FOCUS_ZOOM: u8 = 13;

/// A clicked position together with its reverse-geocoded name
#[derive(Debug, Clone, PartialEq)]
pub struct ClickedPlace {
    pub position: LatLon,
    pub name: String,
}

/// What the map should currently show
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLon,
    pub zoom: u8,
}

/// Transient client-side state: at most one active selection at a time,
/// discarded on reset or replaced by the next interaction.
#[derive(Debug, Default)]
pub struct MapView {
    pub selected: Option<Place>,
    pub user_location: Option<LatLon>,
    pub clicked: Option<ClickedPlace>,
    pub geolocation_error: Option<String>,
}

impl MapView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected search result takes precedence over the user's position;
    /// with neither, the country-wide default view.
    pub fn viewport(&self) -> Viewport {
        if let Some(selected) = &self.selected {
            return Viewport {
                center: LatLon::new(selected.lat, selected.lon),
                zoom: FOCUS_ZOOM,
            };
        }
        if let Some(user) = self.user_location {
            return Viewport {
                center: user,
                zoom: FOCUS_ZOOM,
            };
        }
        Viewport {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Focus on a chosen search candidate
    pub fn select(&mut self, place: Place) {
        self.selected = Some(place);
    }

    /// Clear selection and clicked marker
    pub fn reset(&mut self) {
        self.selected = None;
        self.clicked = None;
    }

    /// Drop a marker at a clicked position, labelled by reverse geocoding.
    /// Lookup failures degrade to a fixed placeholder name.
    pub async fn click(&mut self, position: LatLon, geocoder: &dyn Geocoder) {
        let name = match geocoder.reverse(position.lat, position.lon).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(
                    "Reverse geocoding failed at {}, {}: {}",
                    position.lat,
                    position.lon,
                    e
                );
                UNKNOWN_PLACE.to_string()
            }
        };
        self.clicked = Some(ClickedPlace { position, name });
    }

    /// Resolve the user's position; denial surfaces a static message
    pub async fn locate(&mut self, provider: &dyn LocationProvider) {
        match provider.current_position().await {
            Ok(position) => {
                self.user_location = Some(position);
                self.geolocation_error = None;
            }
            Err(e) => {
                tracing::error!("Geolocation failed: {}", e);
                self.geolocation_error = Some(GEOLOCATION_ERROR_MESSAGE.to_string());
                self.user_location = None;
            }
        }
    }
}
