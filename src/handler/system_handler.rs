use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::warn;

use crate::dto::system_dto::{DiagnosticsResponse, LivenessResponse, SchemaManifest};
use crate::repository::diagnostics_repo::MongoDiagnostics;
use crate::repository::COLLECTIONS;

pub async fn root_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "DreamNest API running".to_string(),
    })
}

pub async fn schema_handler() -> Json<SchemaManifest> {
    Json(SchemaManifest {
        collections: COLLECTIONS.iter().map(|c| c.to_string()).collect(),
    })
}

/// Connectivity diagnostic. Database failures are reported in the body as a
/// truncated message string, never as an error status.
pub async fn test_database_handler(
    State(diagnostics): State<Arc<MongoDiagnostics>>,
) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: Some(
            if diagnostics.uri_configured() {
                "✅ Set"
            } else {
                "❌ Not Set"
            }
            .to_string(),
        ),
        database_name: Some(diagnostics.database_name().to_string()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match diagnostics.collection_names().await {
        Ok(names) => {
            response.collections = names.into_iter().take(10).collect();
            response.database = "✅ Connected & Working".to_string();
            response.connection_status = "Connected".to_string();
        }
        Err(e) => {
            warn!("Database diagnostic failed: {}", e);
            let message: String = e.to_string().chars().take(80).collect();
            response.database = format!("⚠️ Connected but Error: {}", message);
        }
    }

    Json(response)
}
