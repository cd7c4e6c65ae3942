// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Footprint history, calculator and report endpoint tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_history_is_seeded_most_recent_first() {
    let (app, _state, _dir) = common::create_test_app();
    let token = common::register_and_token(&app).await;

    let response = common::get_with_token(&app, "/api/footprint", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["total"], 6);

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries[0]["date"], "2024-12-01");
    assert_eq!(entries[0]["total"], 250);
    assert_eq!(entries[5]["date"], "2024-07-01");
    assert_eq!(entries[4]["source"], "integration");
}

#[tokio::test]
async fn test_calculator_submission_reference_values() {
    let (app, _state, _dir) = common::create_test_app();
    let token = common::register_and_token(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/footprint")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "travel": {"flightMiles": 500, "carMiles": 1200, "publicTransport": 0},
                        "homeEnergy": {"electricity": 800, "gas": 50, "heating": 0},
                        "foodPurchases": {"meat": 20, "dairy": 15, "processed": 0}
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let entry = common::body_json(response).await;
    assert_eq!(entry["travel"], 605);
    assert_eq!(entry["homeEnergy"], 410);
    assert_eq!(entry["foodPurchases"], 178);
    assert_eq!(entry["total"], 1193);
    assert_eq!(entry["source"], "manual");

    // The new entry lands at the front of the history.
    let history =
        common::body_json(common::get_with_token(&app, "/api/footprint", Some(&token)).await).await;
    assert_eq!(history["total"], 7);
    assert_eq!(history["entries"][0]["total"], 1193);
}

#[tokio::test]
async fn test_summary_over_seeded_history() {
    let (app, _state, _dir) = common::create_test_app();
    let token = common::register_and_token(&app).await;

    let response = common::get_with_token(&app, "/api/footprint/summary", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let summary = common::body_json(response).await;
    assert_eq!(summary["totalRecords"], 6);
    assert_eq!(summary["averageTotal"], 253); // round(1520 / 6)
    assert_eq!(summary["netChange"], 25); // 250 - 225
    assert_eq!(summary["forecast"], 249); // round(250 + (250 - 255) / 6)
}

#[tokio::test]
async fn test_csv_export() {
    let (app, _state, _dir) = common::create_test_app();
    let token = common::register_and_token(&app).await;

    let response = common::get_with_token(&app, "/api/footprint/export", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"carbon-footprint-report.csv\""
    );

    let csv = common::body_text(response).await;
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Date,Travel,Home Energy,Food & Purchases,Total")
    );
    assert_eq!(lines.next(), Some("2024-12-01,120,85,45,250"));
    assert_eq!(csv.lines().count(), 7); // header + 6 seeded rows
}

#[tokio::test]
async fn test_metrics_endpoint_serves_injected_source() {
    let (app, _state, _dir) = common::create_test_app();
    let token = common::register_and_token(&app).await;

    let response = common::get_with_token(&app, "/api/metrics", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let metrics = common::body_json(response).await;
    assert_eq!(metrics["activeUsers"], 1200);
    assert_eq!(metrics["apiCalls"], 24_000);
    assert_eq!(metrics["uptime"], 99.88);
    assert_eq!(metrics["lastUpdate"], "2025-01-01T00:00:00Z");
}
