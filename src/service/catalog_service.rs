use async_trait::async_trait;
use tracing::info;

use crate::dto::catalog_dto::{
    CatalogResponse, CreateCommunityRequest, CreateFlatRequest, CreateFloorPlanRequest,
    CreateTowerRequest,
};
use crate::model::catalog::{Community, Flat, FloorPlan, Tower};
use crate::repository::catalog_repo::{CatalogRepository, MongoCatalogRepository};
use crate::util::error::ServiceError;

#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn add_community(&self, request: CreateCommunityRequest) -> Result<String, ServiceError>;
    async fn add_tower(&self, request: CreateTowerRequest) -> Result<String, ServiceError>;
    async fn add_flat(&self, request: CreateFlatRequest) -> Result<String, ServiceError>;
    async fn add_floorplan(&self, request: CreateFloorPlanRequest) -> Result<String, ServiceError>;
    async fn catalog(&self) -> Result<CatalogResponse, ServiceError>;
}

pub struct CatalogServiceImpl {
    pub catalog_repo: MongoCatalogRepository,
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_community(&self, request: CreateCommunityRequest) -> Result<String, ServiceError> {
        let community = Community {
            id: None,
            name: request.name,
            city: request.city,
            starting_price: request.starting_price,
            image_url: request.image_url,
            amenities_images: request.amenities_images,
            created_at: None,
            updated_at: None,
        };
        let id = self
            .catalog_repo
            .insert_community(community)
            .await
            .map_err(ServiceError::from)?;
        Ok(id.to_hex())
    }

    async fn add_tower(&self, request: CreateTowerRequest) -> Result<String, ServiceError> {
        let tower = Tower {
            id: None,
            name: request.name,
            community_id: request.community_id,
            images: request.images,
            pdfs: request.pdfs,
            created_at: None,
            updated_at: None,
        };
        let id = self
            .catalog_repo
            .insert_tower(tower)
            .await
            .map_err(ServiceError::from)?;
        Ok(id.to_hex())
    }

    async fn add_flat(&self, request: CreateFlatRequest) -> Result<String, ServiceError> {
        let flat = Flat {
            id: None,
            number: request.number,
            tower_id: request.tower_id,
            bhk_type: request.bhk_type,
            status: request.status,
            images: request.images,
            created_at: None,
            updated_at: None,
        };
        let id = self
            .catalog_repo
            .insert_flat(flat)
            .await
            .map_err(ServiceError::from)?;
        Ok(id.to_hex())
    }

    async fn add_floorplan(&self, request: CreateFloorPlanRequest) -> Result<String, ServiceError> {
        let plan = FloorPlan {
            id: None,
            bhk_type: request.bhk_type,
            image_url: request.image_url,
            pdf_url: request.pdf_url,
            carpet_area: request.carpet_area,
            uds_area: request.uds_area,
            created_at: None,
            updated_at: None,
        };
        let id = self
            .catalog_repo
            .insert_floorplan(plan)
            .await
            .map_err(ServiceError::from)?;
        Ok(id.to_hex())
    }

    async fn catalog(&self) -> Result<CatalogResponse, ServiceError> {
        info!("Building aggregated catalog listing");
        let communities = self.catalog_repo.list_communities().await?;
        let towers = self.catalog_repo.list_towers().await?;
        let flats = self.catalog_repo.list_flats().await?;
        let floorplans = self.catalog_repo.list_floorplans().await?;

        Ok(CatalogResponse {
            communities: communities.into_iter().map(Into::into).collect(),
            towers: towers.into_iter().map(Into::into).collect(),
            flats: flats.into_iter().map(Into::into).collect(),
            floorplans: floorplans.into_iter().map(Into::into).collect(),
        })
    }
}
