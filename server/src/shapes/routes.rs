//! HTTP route handlers for the shapes API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::service::ShapeService;
use super::types::FeatureCollection;

/// Application state containing the shape service
#[derive(Clone)]
pub struct ShapeAppState {
    pub shape_service: Arc<dyn ShapeService>,
}

/// Error response for the shapes API
#[derive(Debug, Serialize, Deserialize)]
pub struct ShapeErrorResponse {
    pub error: String,
}

impl IntoResponse for ShapeErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

/// Response for GET /test-db
#[derive(Debug, Serialize, Deserialize)]
pub struct DbCheckResponse {
    pub message: String,
    pub time: String,
}

/// GET /api/shapes - All stored shapes as a GeoJSON FeatureCollection
pub async fn list_shapes(
    State(state): State<ShapeAppState>,
) -> Result<Json<FeatureCollection>, ShapeErrorResponse> {
    let rows = state.shape_service.list_shapes().await.map_err(|e| {
        tracing::error!("Failed to fetch shapes: {}", e);
        ShapeErrorResponse {
            error: "Failed to fetch shapes".to_string(),
        }
    })?;

    let collection = FeatureCollection::from_rows(rows).map_err(|e| {
        tracing::error!("Failed to build feature collection: {}", e);
        ShapeErrorResponse {
            error: "Failed to fetch shapes".to_string(),
        }
    })?;

    Ok(Json(collection))
}

/// GET /test-db - Database connectivity check
pub async fn test_db(
    State(state): State<ShapeAppState>,
) -> Result<Json<DbCheckResponse>, ShapeErrorResponse> {
    let time = state.shape_service.database_time().await.map_err(|e| {
        tracing::error!("Database check failed: {}", e);
        ShapeErrorResponse {
            error: "Database connection failed".to_string(),
        }
    })?;

    Ok(Json(DbCheckResponse {
        message: "Database connection OK".to_string(),
        time,
    }))
}

/// GET / - Plain-text liveness probe
pub async fn root() -> &'static str {
    "GeoView server is running"
}

/// Build the full application router
pub fn shape_routes(state: ShapeAppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test-db", get(test_db))
        .route("/api/shapes", get(list_shapes))
        .with_state(state)
}
