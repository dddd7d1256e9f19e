use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handler::system_handler::{root_handler, schema_handler, test_database_handler};
use crate::repository::diagnostics_repo::MongoDiagnostics;

pub fn system_router(diagnostics: Arc<MongoDiagnostics>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/schema", get(schema_handler))
        .route("/test", get(test_database_handler))
        .with_state(diagnostics)
}
