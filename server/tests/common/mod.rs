//! Shared fixtures for the server integration tests

use async_trait::async_trait;
use axum::Router;
use geoview_server::shapes::{ShapeAppState, ShapeError, ShapeRow, ShapeService, shape_routes};
use std::sync::Arc;

/// In-memory shape service: canned rows, or a forced database error
pub struct StubShapeService {
    rows: Vec<ShapeRow>,
    fail: bool,
}

impl StubShapeService {
    pub fn with_rows(rows: Vec<ShapeRow>) -> Self {
        Self { rows, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            rows: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ShapeService for StubShapeService {
    async fn list_shapes(&self) -> Result<Vec<ShapeRow>, ShapeError> {
        if self.fail {
            return Err(ShapeError::Database(sqlx::Error::PoolClosed));
        }
        Ok(self.rows.clone())
    }

    async fn database_time(&self) -> Result<String, ShapeError> {
        if self.fail {
            return Err(ShapeError::Database(sqlx::Error::PoolClosed));
        }
        Ok("2026-08-27 12:00:00+00".to_string())
    }
}

/// Build the production router over a stub service
pub fn create_test_app(service: StubShapeService) -> Router {
    shape_routes(ShapeAppState {
        shape_service: Arc::new(service),
    })
}

/// A point row matching the stored `POINT(10 36)` example
pub fn point_row(id: i32, name: &str) -> ShapeRow {
    ShapeRow {
        id,
        name: name.to_string(),
        geometry: r#"{"type":"Point","coordinates":[10,36]}"#.to_string(),
    }
}

/// A small square polygon row
pub fn polygon_row(id: i32, name: &str) -> ShapeRow {
    ShapeRow {
        id,
        name: name.to_string(),
        geometry:
            r#"{"type":"Polygon","coordinates":[[[10,36],[10.1,36],[10.1,36.1],[10,36.1],[10,36]]]}"#
                .to_string(),
    }
}
