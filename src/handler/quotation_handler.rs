use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::dto::quotation_dto::{
    CreateQuotationRequest, QuotationCreatedResponse, QuotationResponse,
};
use crate::model::quotation::QuotationInputs;
use crate::service::quotation_service::{QuotationService, QuotationServiceImpl};
use crate::util::error::HandlerError;
use crate::util::object_id::parse_object_id;

/// Price preview: pure calculation, nothing is persisted.
pub async fn compute_quote_handler(
    Json(payload): Json<QuotationInputs>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    Ok(Json(payload.compute()))
}

pub async fn create_quotation_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
    Json(payload): Json<CreateQuotationRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let lead_id = parse_object_id(&payload.lead_id, "lead")?;
    let (quotation, breakdown) = service.create_quotation(lead_id, payload).await?;
    Ok(Json(QuotationCreatedResponse {
        id: quotation.id.map(|id| id.to_hex()).unwrap_or_default(),
        total: breakdown.total,
    }))
}

pub async fn list_quotations_by_lead_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
    Path((lead_id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let lead_id = parse_object_id(&lead_id, "lead")?;
    let quotations = service.list_by_lead(lead_id).await?;
    let quotations: Vec<QuotationResponse> = quotations.into_iter().map(Into::into).collect();
    Ok(Json(quotations))
}
