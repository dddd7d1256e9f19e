use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

use crate::dto::catalog_dto::{
    CreateCommunityRequest, CreateFlatRequest, CreateFloorPlanRequest, CreateTowerRequest,
};
use crate::dto::CreatedResponse;
use crate::service::catalog_service::{CatalogService, CatalogServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_community_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<CreateCommunityRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let id = service.add_community(payload).await?;
    Ok(Json(CreatedResponse { id }))
}

pub async fn create_tower_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<CreateTowerRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let id = service.add_tower(payload).await?;
    Ok(Json(CreatedResponse { id }))
}

pub async fn create_flat_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<CreateFlatRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let id = service.add_flat(payload).await?;
    Ok(Json(CreatedResponse { id }))
}

pub async fn create_floorplan_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<CreateFloorPlanRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let id = service.add_floorplan(payload).await?;
    Ok(Json(CreatedResponse { id }))
}

pub async fn get_catalog_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let catalog = service.catalog().await?;
    Ok(Json(catalog))
}
