//! GeoView Map Client core
//!
//! Headless implementation of the map client's logic: fetching and
//! partitioning the shape layer, debounced address search, reverse
//! geocoding on click, geolocation, and transient view state. A thin
//! rendering frontend drives this library; nothing here touches a screen.

pub mod app;
pub mod geocode;
pub mod location;
pub mod map;
pub mod search;
pub mod shapes;

// Re-export commonly used types
pub use app::MapApp;
pub use geocode::{Geocoder, NominatimGeocoder, Place};
pub use map::{MapLayers, MapView, Viewport, partition};
pub use search::SearchBar;
pub use shapes::ShapesClient;
