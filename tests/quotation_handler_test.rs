use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

use dreamnest_backend::config::mongo_conf::MongoConfig;
use dreamnest_backend::repository::lead_repo::MongoLeadRepository;
use dreamnest_backend::repository::quotation_repo::MongoQuotationRepository;
use dreamnest_backend::router::quotation_router::quotation_router;
use dreamnest_backend::service::quotation_service::QuotationServiceImpl;

async fn test_router() -> axum::Router {
    let mongo_config = MongoConfig::from_test_env();
    let quotation_repo = MongoQuotationRepository::new(&mongo_config)
        .await
        .expect("quotation repo");
    let lead_repo = Arc::new(
        MongoLeadRepository::new(&mongo_config)
            .await
            .expect("lead repo"),
    );
    let service = Arc::new(QuotationServiceImpl {
        quotation_repo,
        lead_repo,
    });
    quotation_router(service)
}

fn compute_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/quotations/compute")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_compute_reference_breakdown() {
    let app = test_router().await;
    let resp = app
        .oneshot(compute_request(json!({
            "area": 1000.0,
            "rate_per_sqft": 1500.0,
            "material_cost": 50000.0,
            "gst_percent": 18.0,
            "markup_percent": 10.0
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["subtotal"], 1_550_000.0);
    assert_eq!(value["gst"], 279_000.0);
    assert_eq!(value["markup"], 182_900.0);
    assert_eq!(value["total"], 2_011_900.0);
}

#[tokio::test]
async fn test_compute_applies_input_defaults() {
    // material_cost -> 0, gst -> 18, markup -> 10
    let app = test_router().await;
    let resp = app
        .oneshot(compute_request(json!({
            "area": 100.0,
            "rate_per_sqft": 50.0
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["subtotal"], 5000.0);
    assert_eq!(value["gst"], 900.0);
    assert_eq!(value["markup"], 590.0);
    assert_eq!(value["total"], 6490.0);
}

#[tokio::test]
async fn test_compute_rejects_negative_area() {
    let app = test_router().await;
    let resp = app
        .oneshot(compute_request(json!({
            "area": -10.0,
            "rate_per_sqft": 50.0
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_compute_rejects_missing_area() {
    let app = test_router().await;
    let resp = app
        .oneshot(compute_request(json!({ "rate_per_sqft": 50.0 })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_quotation_rejects_malformed_lead_id() {
    let app = test_router().await;
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/quotations")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "lead_id": "not-an-id",
                        "inputs": { "area": 100.0, "rate_per_sqft": 50.0 }
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_by_lead_rejects_malformed_id() {
    let app = test_router().await;
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/quotations/by-lead/xyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
