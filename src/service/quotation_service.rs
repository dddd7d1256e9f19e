use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::dto::quotation_dto::CreateQuotationRequest;
use crate::model::quotation::{QuoteBreakdown, Quotation};
use crate::repository::lead_repo::{LeadRepository, MongoLeadRepository};
use crate::repository::quotation_repo::{MongoQuotationRepository, QuotationRepository};
use crate::util::error::ServiceError;

#[async_trait]
pub trait QuotationService: Send + Sync {
    async fn create_quotation(
        &self,
        lead_id: ObjectId,
        request: CreateQuotationRequest,
    ) -> Result<(Quotation, QuoteBreakdown), ServiceError>;
    async fn list_by_lead(&self, lead_id: ObjectId) -> Result<Vec<Quotation>, ServiceError>;
}

pub struct QuotationServiceImpl {
    pub quotation_repo: MongoQuotationRepository,
    pub lead_repo: Arc<MongoLeadRepository>,
}

#[async_trait]
impl QuotationService for QuotationServiceImpl {
    #[instrument(skip(self, request), fields(lead_id = %lead_id))]
    async fn create_quotation(
        &self,
        lead_id: ObjectId,
        request: CreateQuotationRequest,
    ) -> Result<(Quotation, QuoteBreakdown), ServiceError> {
        if !self.lead_repo.exists(lead_id).await? {
            return Err(ServiceError::NotFound("Lead not found".to_string()));
        }

        let breakdown = request.inputs.compute();
        info!(total = breakdown.total, "Computed quotation price");

        let quotation = Quotation {
            id: None,
            lead_id: lead_id.to_hex(),
            project_id: request.project_id,
            pricing_inputs: request.inputs,
            generated_price: breakdown.total,
            pdf_url: None,
            created_by: request.created_by,
            created_at: None,
            updated_at: None,
        };
        let created = self.quotation_repo.create(quotation).await?;
        Ok((created, breakdown))
    }

    async fn list_by_lead(&self, lead_id: ObjectId) -> Result<Vec<Quotation>, ServiceError> {
        let quotations = self.quotation_repo.list_by_lead(&lead_id.to_hex()).await?;
        Ok(quotations)
    }
}
