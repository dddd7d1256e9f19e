use serde::{Deserialize, Serialize};

/// Liveness message for `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub message: String,
}

/// Manifest of known collection names for `GET /schema`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaManifest {
    pub collections: Vec<String>,
}

/// Connectivity diagnostic for `GET /test`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}
