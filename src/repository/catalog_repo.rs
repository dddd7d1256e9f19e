use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::stream::StreamExt;
use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::config::mongo_conf::MongoConfig;
use crate::model::catalog::{Community, Flat, FloorPlan, Tower};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn insert_community(&self, community: Community) -> RepositoryResult<ObjectId>;
    async fn insert_tower(&self, tower: Tower) -> RepositoryResult<ObjectId>;
    async fn insert_flat(&self, flat: Flat) -> RepositoryResult<ObjectId>;
    async fn insert_floorplan(&self, plan: FloorPlan) -> RepositoryResult<ObjectId>;
    async fn list_communities(&self) -> RepositoryResult<Vec<Community>>;
    async fn list_towers(&self) -> RepositoryResult<Vec<Tower>>;
    async fn list_flats(&self) -> RepositoryResult<Vec<Flat>>;
    async fn list_floorplans(&self) -> RepositoryResult<Vec<FloorPlan>>;
}

pub struct MongoCatalogRepository {
    communities: mongodb::Collection<Community>,
    towers: mongodb::Collection<Tower>,
    flats: mongodb::Collection<Flat>,
    floorplans: mongodb::Collection<FloorPlan>,
}

impl MongoCatalogRepository {
    pub async fn new(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        let db = crate::repository::connect_database(config).await?;
        Ok(MongoCatalogRepository {
            communities: db.collection::<Community>("community"),
            towers: db.collection::<Tower>("tower"),
            flats: db.collection::<Flat>("flat"),
            floorplans: db.collection::<FloorPlan>("floorplan"),
        })
    }
}

async fn drain_cursor<T: DeserializeOwned + Unpin + Send + Sync>(
    mut cursor: mongodb::Cursor<T>,
    entity: &str,
) -> RepositoryResult<Vec<T>> {
    let mut records = Vec::new();
    while let Some(record) = cursor.next().await {
        match record {
            Ok(r) => records.push(r),
            Err(e) => {
                error!("Failed to deserialize {}: {}", entity, e);
                return Err(RepositoryError::serialization(format!(
                    "Failed to deserialize {}: {}",
                    entity, e
                )));
            }
        }
    }
    Ok(records)
}

#[async_trait]
impl CatalogRepository for MongoCatalogRepository {
    #[tracing::instrument(skip(self, community))]
    async fn insert_community(&self, community: Community) -> RepositoryResult<ObjectId> {
        let mut record = community;
        let id = ObjectId::new();
        record.id = Some(id);
        let time = chrono::Utc::now().to_rfc3339();
        record.created_at = Some(time.clone());
        record.updated_at = Some(time);

        match self.communities.insert_one(record.clone(), None).await {
            Ok(_) => {
                info!("Community created successfully");
                Ok(id)
            }
            Err(e) => {
                error!("Failed to create community: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to create community: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self, tower))]
    async fn insert_tower(&self, tower: Tower) -> RepositoryResult<ObjectId> {
        let mut record = tower;
        let id = ObjectId::new();
        record.id = Some(id);
        let time = chrono::Utc::now().to_rfc3339();
        record.created_at = Some(time.clone());
        record.updated_at = Some(time);

        match self.towers.insert_one(record.clone(), None).await {
            Ok(_) => {
                info!("Tower created successfully");
                Ok(id)
            }
            Err(e) => {
                error!("Failed to create tower: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to create tower: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self, flat))]
    async fn insert_flat(&self, flat: Flat) -> RepositoryResult<ObjectId> {
        let mut record = flat;
        let id = ObjectId::new();
        record.id = Some(id);
        let time = chrono::Utc::now().to_rfc3339();
        record.created_at = Some(time.clone());
        record.updated_at = Some(time);

        match self.flats.insert_one(record.clone(), None).await {
            Ok(_) => {
                info!("Flat created successfully");
                Ok(id)
            }
            Err(e) => {
                error!("Failed to create flat: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to create flat: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self, plan))]
    async fn insert_floorplan(&self, plan: FloorPlan) -> RepositoryResult<ObjectId> {
        let mut record = plan;
        let id = ObjectId::new();
        record.id = Some(id);
        let time = chrono::Utc::now().to_rfc3339();
        record.created_at = Some(time.clone());
        record.updated_at = Some(time);

        match self.floorplans.insert_one(record.clone(), None).await {
            Ok(_) => {
                info!("Floor plan created successfully");
                Ok(id)
            }
            Err(e) => {
                error!("Failed to create floor plan: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to create floor plan: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list_communities(&self) -> RepositoryResult<Vec<Community>> {
        let cursor = self
            .communities
            .find(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list communities: {}", e)))?;
        drain_cursor(cursor, "community").await
    }

    #[tracing::instrument(skip(self))]
    async fn list_towers(&self) -> RepositoryResult<Vec<Tower>> {
        let cursor = self
            .towers
            .find(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list towers: {}", e)))?;
        drain_cursor(cursor, "tower").await
    }

    #[tracing::instrument(skip(self))]
    async fn list_flats(&self) -> RepositoryResult<Vec<Flat>> {
        let cursor = self
            .flats
            .find(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list flats: {}", e)))?;
        drain_cursor(cursor, "flat").await
    }

    #[tracing::instrument(skip(self))]
    async fn list_floorplans(&self) -> RepositoryResult<Vec<FloorPlan>> {
        let cursor = self
            .floorplans
            .find(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list floor plans: {}", e)))?;
        drain_cursor(cursor, "floorplan").await
    }
}
