use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::handler::lead_handler::{
    create_follow_up_handler, create_lead_handler, list_follow_ups_handler, list_leads_handler,
    update_lead_handler,
};
use crate::service::lead_service::LeadServiceImpl;

pub fn lead_router(service: Arc<LeadServiceImpl>) -> Router {
    Router::new()
        .route("/api/leads", post(create_lead_handler).get(list_leads_handler))
        .route("/api/leads/{id}", patch(update_lead_handler))
        .route("/api/followups", post(create_follow_up_handler))
        .route("/api/followups/{lead_id}", get(list_follow_ups_handler))
        .with_state(service)
}
