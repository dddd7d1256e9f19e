use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

use dreamnest_backend::config::mongo_conf::MongoConfig;
use dreamnest_backend::repository::followup_repo::MongoFollowUpRepository;
use dreamnest_backend::repository::lead_repo::MongoLeadRepository;
use dreamnest_backend::router::lead_router::lead_router;
use dreamnest_backend::service::lead_service::LeadServiceImpl;

async fn test_router() -> axum::Router {
    let mongo_config = MongoConfig::from_test_env();
    let lead_repo = Arc::new(
        MongoLeadRepository::new(&mongo_config)
            .await
            .expect("lead repo"),
    );
    let followup_repo = MongoFollowUpRepository::new(&mongo_config)
        .await
        .expect("followup repo");
    let service = Arc::new(LeadServiceImpl {
        lead_repo,
        followup_repo,
    });
    lead_router(service)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_patch_rejects_malformed_id() {
    let app = test_router().await;
    let resp = app
        .oneshot(json_request(
            "PATCH",
            "/api/leads/not-an-id",
            json!({ "status": "Contacted" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_empty_body_reports_not_updated() {
    // Well-formed id, empty patch: no write is attempted, so no database
    // is needed to answer.
    let app = test_router().await;
    let resp = app
        .oneshot(json_request(
            "PATCH",
            "/api/leads/65f1a2b3c4d5e6f708192a3b",
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["updated"], false);
}

#[tokio::test]
async fn test_create_follow_up_rejects_malformed_lead_id() {
    let app = test_router().await;
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/followups",
            json!({ "lead_id": "garbage", "notes": "call back tomorrow" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_follow_ups_rejects_malformed_lead_id() {
    let app = test_router().await;
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/followups/xyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_lead_rejects_missing_phone() {
    let app = test_router().await;
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/leads",
            json!({ "name": "Asha Verma" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_lead_rejects_invalid_email() {
    let app = test_router().await;
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/leads",
            json!({
                "name": "Asha Verma",
                "phone": "9876543210",
                "email": "not-an-email"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_follow_up_rejects_unknown_kind() {
    let app = test_router().await;
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/followups",
            json!({
                "lead_id": "65f1a2b3c4d5e6f708192a3b",
                "notes": "sent brochure",
                "type": "email"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
