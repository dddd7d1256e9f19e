use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::quotation_handler::{
    compute_quote_handler, create_quotation_handler, list_quotations_by_lead_handler,
};
use crate::service::quotation_service::QuotationServiceImpl;

pub fn quotation_router(service: Arc<QuotationServiceImpl>) -> Router {
    Router::new()
        .route("/api/quotations/compute", post(compute_quote_handler))
        .route("/api/quotations", post(create_quotation_handler))
        .route(
            "/api/quotations/by-lead/{lead_id}",
            get(list_quotations_by_lead_handler),
        )
        .with_state(service)
}
