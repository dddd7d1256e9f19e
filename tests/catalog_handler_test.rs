use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

use dreamnest_backend::config::mongo_conf::MongoConfig;
use dreamnest_backend::repository::catalog_repo::MongoCatalogRepository;
use dreamnest_backend::router::catalog_router::catalog_router;
use dreamnest_backend::service::catalog_service::CatalogServiceImpl;

async fn test_router() -> axum::Router {
    let mongo_config = MongoConfig::from_test_env();
    let catalog_repo = MongoCatalogRepository::new(&mongo_config)
        .await
        .expect("catalog repo");
    let service = Arc::new(CatalogServiceImpl { catalog_repo });
    catalog_router(service)
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_community_rejects_negative_starting_price() {
    let app = test_router().await;
    let resp = app
        .oneshot(json_request(
            "/api/communities",
            json!({
                "name": "Palm Grove",
                "city": "Pune",
                "starting_price": -100.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_community_rejects_missing_city() {
    let app = test_router().await;
    let resp = app
        .oneshot(json_request("/api/communities", json!({ "name": "Palm Grove" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_flat_rejects_unknown_status() {
    let app = test_router().await;
    let resp = app
        .oneshot(json_request(
            "/api/flats",
            json!({
                "number": "A-1203",
                "tower_id": "65f1a2b3c4d5e6f708192a3c",
                "bhk_type": "3BHK",
                "status": "demolished"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_floorplan_rejects_negative_area() {
    let app = test_router().await;
    let resp = app
        .oneshot(json_request(
            "/api/floorplans",
            json!({ "bhk_type": "2BHK", "carpet_area": -5.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
