use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use tracing::{error, info};

use crate::config::mongo_conf::MongoConfig;
use crate::model::lead::FollowUp;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait FollowUpRepository: Send + Sync {
    async fn create(&self, followup: FollowUp) -> RepositoryResult<FollowUp>;
    /// Follow-ups for a lead, newest first
    async fn list_by_lead(&self, lead_id: &str) -> RepositoryResult<Vec<FollowUp>>;
}

pub struct MongoFollowUpRepository {
    collection: mongodb::Collection<FollowUp>,
}

impl MongoFollowUpRepository {
    pub async fn new(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        let db = crate::repository::connect_database(config).await?;
        let collection = db.collection::<FollowUp>("followup");
        Ok(MongoFollowUpRepository { collection })
    }
}

#[async_trait]
impl FollowUpRepository for MongoFollowUpRepository {
    #[tracing::instrument(skip(self, followup), fields(lead_id = %followup.lead_id))]
    async fn create(&self, followup: FollowUp) -> RepositoryResult<FollowUp> {
        info!("Creating new follow-up");
        let mut new_followup = followup;
        new_followup.id = Some(ObjectId::new());
        let time = chrono::Utc::now().to_rfc3339();
        new_followup.created_at = Some(time.clone());
        new_followup.updated_at = Some(time);

        match self.collection.insert_one(new_followup.clone(), None).await {
            Ok(_) => {
                info!("Follow-up created successfully");
                Ok(new_followup)
            }
            Err(e) => {
                error!("Failed to create follow-up: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to create follow-up: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list_by_lead(&self, lead_id: &str) -> RepositoryResult<Vec<FollowUp>> {
        let filter = doc! { "lead_id": lead_id };
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let mut cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list follow-ups: {}", e)))?;

        let mut followups = Vec::new();
        while let Some(followup) = cursor.next().await {
            match followup {
                Ok(f) => followups.push(f),
                Err(e) => {
                    error!("Failed to deserialize follow-up: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize follow-up: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} follow-ups", followups.len());
        Ok(followups)
    }
}
