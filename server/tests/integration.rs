//! Integration tests for the GeoView server
//!
//! These tests drive the production router end to end over a stubbed
//! shape service, verifying the HTTP contract of every route.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::util::ServiceExt;

mod common;
use common::*;

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_root_returns_liveness_text() {
    let app = create_test_app(StubShapeService::with_rows(vec![]));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"GeoView server is running");
}

#[tokio::test]
async fn test_shapes_feature_count_matches_row_count() {
    let app = create_test_app(StubShapeService::with_rows(vec![
        polygon_row(1, "Zone A"),
        polygon_row(2, "Zone B"),
        point_row(3, "City"),
    ]));

    let (status, json) = get(app, "/api/shapes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(json["features"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_shapes_wire_format_for_single_point() {
    let app = create_test_app(StubShapeService::with_rows(vec![point_row(1, "Test")]));

    let (status, json) = get(app, "/api/shapes").await;

    assert_eq!(status, StatusCode::OK);
    let expected: serde_json::Value = serde_json::from_str(
        r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"id":1,"name":"Test"},"geometry":{"type":"Point","coordinates":[10,36]}}]}"#,
    )
    .unwrap();
    assert_eq!(json, expected);
}

#[tokio::test]
async fn test_shapes_response_is_json() {
    let app = create_test_app(StubShapeService::with_rows(vec![point_row(1, "Test")]));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/shapes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_shapes_database_failure_returns_500_with_error_field() {
    let app = create_test_app(StubShapeService::failing());

    let (status, json) = get(app, "/api/shapes").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_shapes_empty_table_yields_empty_collection() {
    let app = create_test_app(StubShapeService::with_rows(vec![]));

    let (status, json) = get(app, "/api/shapes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["features"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_db_check_returns_message_and_time() {
    let app = create_test_app(StubShapeService::with_rows(vec![]));

    let (status, json) = get(app, "/test-db").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].is_string());
    assert_eq!(json["time"], "2026-08-27 12:00:00+00");
}

#[tokio::test]
async fn test_db_check_failure_returns_500() {
    let app = create_test_app(StubShapeService::failing());

    let (status, json) = get(app, "/test-db").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());
}
