//! Geocoding against the public Nominatim API
//!
//! Forward search is restricted to one country; reverse lookups resolve a
//! clicked position to a display name. Both are read-only JSON calls with
//! no authentication.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Public Nominatim instance
const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Country restriction for forward search
const COUNTRY_CODES: &str = "tn";

/// Label used when a reverse lookup fails
pub const UNKNOWN_PLACE: &str = "Unknown location";

/// Errors from the geocoding API
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("No place found at {lat}, {lon}")]
    NoResult { lat: f64, lon: f64 },

    #[error("Malformed coordinate in geocoder response: {0}")]
    BadCoordinate(#[from] std::num::ParseFloatError),
}

/// A geocoded place candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

/// Trait for geocoding backends
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Forward search: free-text query to candidate places
    async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError>;

    /// Reverse lookup: coordinates to a display name
    async fn reverse(&self, lat: f64, lon: f64) -> Result<String, GeocodeError>;
}

/// Nominatim returns coordinates as strings
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

impl TryFrom<NominatimPlace> for Place {
    type Error = GeocodeError;

    fn try_from(raw: NominatimPlace) -> Result<Self, Self::Error> {
        Ok(Self {
            lat: raw.lat.parse()?,
            lon: raw.lon.parse()?,
            display_name: raw.display_name,
        })
    }
}

#[derive(Debug, Deserialize)]
struct NominatimReverse {
    display_name: Option<String>,
}

/// Geocoder backed by the public Nominatim endpoints
pub struct NominatimGeocoder {
    http: reqwest::Client,
    base_url: String,
    country_codes: String,
}

impl NominatimGeocoder {
    pub fn new() -> Self {
        Self::with_base_url(NOMINATIM_URL)
    }

    /// Point at a different Nominatim instance (or a test server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            country_codes: COUNTRY_CODES.to_string(),
        }
    }
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        let raw: Vec<NominatimPlace> = self
            .http
            .get(format!("{}/search", self.base_url))
            .header(
                reqwest::header::USER_AGENT,
                concat!("geoview/", env!("CARGO_PKG_VERSION")),
            )
            .query(&[
                ("q", query),
                ("format", "json"),
                ("countrycodes", self.country_codes.as_str()),
                ("addressdetails", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        raw.into_iter().map(Place::try_from).collect()
    }

    async fn reverse(&self, lat: f64, lon: f64) -> Result<String, GeocodeError> {
        let raw: NominatimReverse = self
            .http
            .get(format!("{}/reverse", self.base_url))
            .header(
                reqwest::header::USER_AGENT,
                concat!("geoview/", env!("CARGO_PKG_VERSION")),
            )
            .query(&[
                ("format", "json".to_string()),
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        raw.display_name
            .ok_or(GeocodeError::NoResult { lat, lon })
    }
}
