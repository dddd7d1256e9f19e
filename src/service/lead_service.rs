use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::dto::lead_dto::{CreateFollowUpRequest, CreateLeadRequest, UpdateLeadRequest};
use crate::model::lead::{FollowUp, Lead};
use crate::repository::followup_repo::{FollowUpRepository, MongoFollowUpRepository};
use crate::repository::lead_repo::{LeadRepository, MongoLeadRepository};
use crate::util::error::ServiceError;

#[async_trait]
pub trait LeadService: Send + Sync {
    async fn create_lead(&self, request: CreateLeadRequest) -> Result<Lead, ServiceError>;
    async fn list_leads(&self, assigned_to: Option<&str>) -> Result<Vec<Lead>, ServiceError>;
    async fn update_lead(&self, id: ObjectId, request: UpdateLeadRequest)
        -> Result<(), ServiceError>;
    async fn add_follow_up(
        &self,
        lead_id: ObjectId,
        request: CreateFollowUpRequest,
    ) -> Result<FollowUp, ServiceError>;
    async fn list_follow_ups(&self, lead_id: ObjectId) -> Result<Vec<FollowUp>, ServiceError>;
}

pub struct LeadServiceImpl {
    pub lead_repo: Arc<MongoLeadRepository>,
    pub followup_repo: MongoFollowUpRepository,
}

#[async_trait]
impl LeadService for LeadServiceImpl {
    #[instrument(skip(self, request))]
    async fn create_lead(&self, request: CreateLeadRequest) -> Result<Lead, ServiceError> {
        info!("Registering new lead");
        let lead = Lead {
            id: None,
            name: request.name,
            phone: request.phone,
            email: request.email,
            assigned_agent_id: None,
            assigned_manager_id: None,
            requirement_type: Some(
                request
                    .requirement_type
                    .unwrap_or_else(|| "Interior".to_string()),
            ),
            source: Some(request.source.unwrap_or_else(|| "web".to_string())),
            status: "New".to_string(),
            follow_up_ids: Vec::new(),
            created_at: None,
            updated_at: None,
        };
        let created = self.lead_repo.create(lead).await?;
        Ok(created)
    }

    async fn list_leads(&self, assigned_to: Option<&str>) -> Result<Vec<Lead>, ServiceError> {
        let leads = self.lead_repo.list(assigned_to).await?;
        Ok(leads)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_lead(
        &self,
        id: ObjectId,
        request: UpdateLeadRequest,
    ) -> Result<(), ServiceError> {
        let mut patch = bson::Document::new();
        if let Some(status) = request.status {
            patch.insert("status", status);
        }
        if let Some(agent_id) = request.assigned_agent_id {
            patch.insert("assigned_agent_id", agent_id);
        }
        if let Some(manager_id) = request.assigned_manager_id {
            patch.insert("assigned_manager_id", manager_id);
        }
        self.lead_repo.update_fields(id, patch).await?;
        Ok(())
    }

    #[instrument(skip(self, request), fields(lead_id = %lead_id))]
    async fn add_follow_up(
        &self,
        lead_id: ObjectId,
        request: CreateFollowUpRequest,
    ) -> Result<FollowUp, ServiceError> {
        if !self.lead_repo.exists(lead_id).await? {
            return Err(ServiceError::NotFound("Lead not found".to_string()));
        }

        let followup = FollowUp {
            id: None,
            lead_id: lead_id.to_hex(),
            notes: request.notes,
            next_date: request.next_date,
            kind: request.kind,
            agent_id: request.agent_id,
            created_at: None,
            updated_at: None,
        };

        // Two separate single-document writes; a failure between them leaves
        // a follow-up with no back-reference on the lead.
        let created = self.followup_repo.create(followup).await?;
        let followup_id = created
            .id
            .ok_or_else(|| ServiceError::InternalError("Missing follow-up id".to_string()))?;
        self.lead_repo
            .push_follow_up(lead_id, &followup_id.to_hex())
            .await?;

        Ok(created)
    }

    async fn list_follow_ups(&self, lead_id: ObjectId) -> Result<Vec<FollowUp>, ServiceError> {
        let followups = self.followup_repo.list_by_lead(&lead_id.to_hex()).await?;
        Ok(followups)
    }
}
