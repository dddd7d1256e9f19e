use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use tracing::{error, info};

use crate::config::mongo_conf::MongoConfig;
use crate::model::quotation::Quotation;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait QuotationRepository: Send + Sync {
    async fn create(&self, quotation: Quotation) -> RepositoryResult<Quotation>;
    /// Quotations for a lead, newest first
    async fn list_by_lead(&self, lead_id: &str) -> RepositoryResult<Vec<Quotation>>;
}

pub struct MongoQuotationRepository {
    collection: mongodb::Collection<Quotation>,
}

impl MongoQuotationRepository {
    pub async fn new(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        let db = crate::repository::connect_database(config).await?;
        let collection = db.collection::<Quotation>("quotation");
        Ok(MongoQuotationRepository { collection })
    }
}

#[async_trait]
impl QuotationRepository for MongoQuotationRepository {
    #[tracing::instrument(skip(self, quotation), fields(lead_id = %quotation.lead_id))]
    async fn create(&self, quotation: Quotation) -> RepositoryResult<Quotation> {
        info!("Creating new quotation");
        let mut new_quotation = quotation;
        new_quotation.id = Some(ObjectId::new());
        let time = chrono::Utc::now().to_rfc3339();
        new_quotation.created_at = Some(time.clone());
        new_quotation.updated_at = Some(time);

        match self.collection.insert_one(new_quotation.clone(), None).await {
            Ok(_) => {
                info!("Quotation created successfully");
                Ok(new_quotation)
            }
            Err(e) => {
                error!("Failed to create quotation: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to create quotation: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list_by_lead(&self, lead_id: &str) -> RepositoryResult<Vec<Quotation>> {
        let filter = doc! { "lead_id": lead_id };
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let mut cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list quotations: {}", e)))?;

        let mut quotations = Vec::new();
        while let Some(quotation) = cursor.next().await {
            match quotation {
                Ok(q) => quotations.push(q),
                Err(e) => {
                    error!("Failed to deserialize quotation: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize quotation: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} quotations", quotations.len());
        Ok(quotations)
    }
}
