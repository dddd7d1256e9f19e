use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::quotation::{Quotation, QuotationInputs};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuotationRequest {
    pub lead_id: String,

    /// Community or tower id
    pub project_id: Option<String>,

    #[validate(nested)]
    pub inputs: QuotationInputs,

    /// Agent or manager id
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationCreatedResponse {
    pub id: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationResponse {
    pub id: String,
    pub lead_id: String,
    pub project_id: Option<String>,
    pub pricing_inputs: QuotationInputs,
    pub generated_price: f64,
    pub pdf_url: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Quotation> for QuotationResponse {
    fn from(quotation: Quotation) -> Self {
        QuotationResponse {
            id: quotation.id.map(|id| id.to_hex()).unwrap_or_default(),
            lead_id: quotation.lead_id,
            project_id: quotation.project_id,
            pricing_inputs: quotation.pricing_inputs,
            generated_price: quotation.generated_price,
            pdf_url: quotation.pdf_url,
            created_by: quotation.created_by,
            created_at: quotation.created_at,
            updated_at: quotation.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inputs() -> QuotationInputs {
        QuotationInputs {
            area: 1000.0,
            rate_per_sqft: 1500.0,
            material_cost: 50000.0,
            gst_percent: 18.0,
            markup_percent: 10.0,
        }
    }

    #[test]
    fn test_negative_area_rejected() {
        let mut inputs = valid_inputs();
        inputs.area = -1.0;
        let req = CreateQuotationRequest {
            lead_id: "65f1a2b3c4d5e6f708192a3b".to_string(),
            project_id: None,
            inputs,
            created_by: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_valid_request_passes() {
        let req = CreateQuotationRequest {
            lead_id: "65f1a2b3c4d5e6f708192a3b".to_string(),
            project_id: Some("65f1a2b3c4d5e6f708192a3c".to_string()),
            inputs: valid_inputs(),
            created_by: None,
        };
        assert!(req.validate().is_ok());
    }
}
