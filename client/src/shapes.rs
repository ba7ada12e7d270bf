//! Shape layer fetching
//!
//! One GET against the geometry service on startup; the response is the
//! GeoJSON FeatureCollection the map partitions into layers.

use thiserror::Error;

use geoview_server::shapes::FeatureCollection;

#[derive(Debug, Error)]
pub enum ShapesError {
    #[error("Shape request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Client for the geometry service
pub struct ShapesClient {
    http: reqwest::Client,
    base_url: String,
}

impl ShapesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch all stored shapes
    pub async fn fetch(&self) -> Result<FeatureCollection, ShapesError> {
        let url = format!("{}/api/shapes", self.base_url.trim_end_matches('/'));
        let collection = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(collection)
    }
}
