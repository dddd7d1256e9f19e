use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::catalog_handler::{
    create_community_handler, create_flat_handler, create_floorplan_handler, create_tower_handler,
    get_catalog_handler,
};
use crate::service::catalog_service::CatalogServiceImpl;

pub fn catalog_router(service: Arc<CatalogServiceImpl>) -> Router {
    Router::new()
        .route("/api/catalog", get(get_catalog_handler))
        .route("/api/communities", post(create_community_handler))
        .route("/api/towers", post(create_tower_handler))
        .route("/api/flats", post(create_flat_handler))
        .route("/api/floorplans", post(create_floorplan_handler))
        .with_state(service)
}
