use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::dto::lead_dto::{
    CreateFollowUpRequest, CreateLeadRequest, FollowUpResponse, LeadCreatedResponse, LeadResponse,
    LeadUpdatedResponse, ListLeadsQuery, UpdateLeadRequest,
};
use crate::dto::CreatedResponse;
use crate::service::lead_service::{LeadService, LeadServiceImpl};
use crate::util::error::HandlerError;
use crate::util::object_id::parse_object_id;

pub async fn create_lead_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Json(payload): Json<CreateLeadRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let lead = service.create_lead(payload).await?;
    Ok(Json(LeadCreatedResponse {
        id: lead.id.map(|id| id.to_hex()).unwrap_or_default(),
        status: lead.status,
    }))
}

pub async fn list_leads_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Query(params): Query<ListLeadsQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let leads = service.list_leads(params.assigned_to.as_deref()).await?;
    let leads: Vec<LeadResponse> = leads.into_iter().map(Into::into).collect();
    Ok(Json(leads))
}

pub async fn update_lead_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateLeadRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "lead")?;
    if payload.is_empty() {
        return Ok(Json(LeadUpdatedResponse { updated: false }));
    }
    service.update_lead(id, payload).await?;
    Ok(Json(LeadUpdatedResponse { updated: true }))
}

pub async fn create_follow_up_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Json(payload): Json<CreateFollowUpRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let lead_id = parse_object_id(&payload.lead_id, "lead")?;
    let followup = service.add_follow_up(lead_id, payload).await?;
    Ok(Json(CreatedResponse {
        id: followup.id.map(|id| id.to_hex()).unwrap_or_default(),
    }))
}

pub async fn list_follow_ups_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Path((lead_id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let lead_id = parse_object_id(&lead_id, "lead")?;
    let followups = service.list_follow_ups(lead_id).await?;
    let followups: Vec<FollowUpResponse> = followups.into_iter().map(Into::into).collect();
    Ok(Json(followups))
}
