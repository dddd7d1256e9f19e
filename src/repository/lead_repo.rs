use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use tracing::{error, info};

use crate::config::mongo_conf::MongoConfig;
use crate::model::lead::Lead;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn create(&self, lead: Lead) -> RepositoryResult<Lead>;
    async fn exists(&self, id: ObjectId) -> RepositoryResult<bool>;
    async fn list(&self, assigned_to: Option<&str>) -> RepositoryResult<Vec<Lead>>;
    /// Partial update; errors with NotFound when no lead matches the id.
    async fn update_fields(&self, id: ObjectId, patch: bson::Document) -> RepositoryResult<()>;
    async fn push_follow_up(&self, id: ObjectId, followup_id: &str) -> RepositoryResult<()>;
}

pub struct MongoLeadRepository {
    collection: mongodb::Collection<Lead>,
}

impl MongoLeadRepository {
    pub async fn new(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        let db = crate::repository::connect_database(config).await?;
        let collection = db.collection::<Lead>("lead");
        Ok(MongoLeadRepository { collection })
    }
}

#[async_trait]
impl LeadRepository for MongoLeadRepository {
    #[tracing::instrument(skip(self, lead), fields(name = %lead.name))]
    async fn create(&self, lead: Lead) -> RepositoryResult<Lead> {
        info!("Creating new lead");
        let mut new_lead = lead;
        new_lead.id = Some(ObjectId::new());
        let time = chrono::Utc::now().to_rfc3339();
        new_lead.created_at = Some(time.clone());
        new_lead.updated_at = Some(time);

        match self.collection.insert_one(new_lead.clone(), None).await {
            Ok(_) => {
                info!("Lead created successfully");
                Ok(new_lead)
            }
            Err(e) => {
                error!("Failed to create lead: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to create lead: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn exists(&self, id: ObjectId) -> RepositoryResult<bool> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(found) => Ok(found.is_some()),
            Err(e) => {
                error!("Failed to look up lead: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to look up lead: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, assigned_to: Option<&str>) -> RepositoryResult<Vec<Lead>> {
        // Match either assignment field when a filter is given
        let filter = assigned_to.map(|assignee| {
            doc! {
                "$or": [
                    { "assigned_agent_id": assignee },
                    { "assigned_manager_id": assignee },
                ]
            }
        });
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let mut cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list leads: {}", e)))?;

        let mut leads = Vec::new();
        while let Some(lead) = cursor.next().await {
            match lead {
                Ok(l) => leads.push(l),
                Err(e) => {
                    error!("Failed to deserialize lead: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize lead: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} leads", leads.len());
        Ok(leads)
    }

    #[tracing::instrument(skip(self, patch), fields(id = %id))]
    async fn update_fields(&self, id: ObjectId, patch: bson::Document) -> RepositoryResult<()> {
        info!("Updating lead fields");
        let filter = doc! { "_id": id };
        let mut set = patch;
        set.insert("updated_at", chrono::Utc::now().to_rfc3339());
        let update = doc! { "$set": set };

        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => {
                info!("Lead updated successfully");
                Ok(())
            }
            Ok(_) => {
                error!("No lead found to update for ID: {}", id);
                Err(RepositoryError::not_found(format!(
                    "Lead not found for ID: {}",
                    id
                )))
            }
            Err(e) => {
                error!("Failed to update lead: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to update lead: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id, followup_id = %followup_id))]
    async fn push_follow_up(&self, id: ObjectId, followup_id: &str) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        let update = doc! { "$push": { "follow_up_ids": followup_id } };

        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => Ok(()),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "Lead not found for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to append follow-up to lead: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to append follow-up to lead: {}",
                    e
                )))
            }
        }
    }
}
