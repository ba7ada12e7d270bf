//! Application glue: wires the search bar to the map view

use std::sync::Arc;

use crate::geocode::Geocoder;
use crate::location::LocationProvider;
use crate::map::{LatLon, MapView};
use crate::search::SearchBar;

/// The whole client: one map view, one search bar, one geocoder
pub struct MapApp {
    pub map: MapView,
    pub search: SearchBar,
    geocoder: Arc<dyn Geocoder>,
}

impl MapApp {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            map: MapView::new(),
            search: SearchBar::spawn(geocoder.clone()),
            geocoder,
        }
    }

    /// The user picked a search candidate
    pub fn select_search_result(&mut self, place: crate::geocode::Place) {
        self.map.select(place);
    }

    /// The user cleared the search box: drop local candidates and the
    /// map's selection state
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.map.reset();
    }

    /// The user clicked the map
    pub async fn click(&mut self, position: LatLon) {
        self.map.click(position, self.geocoder.as_ref()).await;
    }

    /// The user asked for their position
    pub async fn locate(&mut self, provider: &dyn LocationProvider) {
        self.map.locate(provider).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::{GeocodeError, Place};
    use async_trait::async_trait;

    struct NullGeocoder;

    #[async_trait]
    impl Geocoder for NullGeocoder {
        async fn search(&self, _query: &str) -> Result<Vec<Place>, GeocodeError> {
            Ok(Vec::new())
        }

        async fn reverse(&self, _lat: f64, _lon: f64) -> Result<String, GeocodeError> {
            Ok("Somewhere".to_string())
        }
    }

    #[tokio::test]
    async fn test_clear_search_resets_map_selection() {
        let mut app = MapApp::new(Arc::new(NullGeocoder));
        app.select_search_result(Place {
            lat: 36.8,
            lon: 10.18,
            display_name: "Tunis".to_string(),
        });
        assert!(app.map.selected.is_some());

        app.clear_search();
        assert!(app.map.selected.is_none());
        assert!(app.map.clicked.is_none());
    }

    #[tokio::test]
    async fn test_click_drops_labelled_marker() {
        let mut app = MapApp::new(Arc::new(NullGeocoder));
        app.click(LatLon::new(36.8, 10.18)).await;
        assert_eq!(app.map.clicked.unwrap().name, "Somewhere");
    }
}
