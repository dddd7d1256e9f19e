pub mod catalog_dto;
pub mod lead_dto;
pub mod quotation_dto;
pub mod system_dto;

use serde::{Deserialize, Serialize};

/// Standard response for creation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}
