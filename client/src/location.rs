//! Geolocation seam
//!
//! Stands in for the platform geolocation API so the view state can be
//! exercised without a browser.

use async_trait::async_trait;
use thiserror::Error;

use crate::map::LatLon;

/// Static user-facing message on geolocation denial or failure
pub const GEOLOCATION_ERROR_MESSAGE: &str =
    "Unable to determine your position. Check geolocation permissions.";

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Geolocation permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    Unavailable(String),
}

/// Trait for position providers (platform geolocation, fixed test positions)
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// The user's current position
    async fn current_position(&self) -> Result<LatLon, LocationError>;
}
