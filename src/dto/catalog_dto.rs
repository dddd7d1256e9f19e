use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::catalog::{Community, Flat, FlatStatus, FloorPlan, Tower};

// --- Validated creation requests ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommunityRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    #[validate(range(min = 0.0))]
    pub starting_price: Option<f64>,

    pub image_url: Option<String>,

    #[serde(default)]
    pub amenities_images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTowerRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub community_id: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub pdfs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFlatRequest {
    #[validate(length(min = 1, max = 50))]
    pub number: String,

    #[validate(length(min = 1, max = 100))]
    pub tower_id: String,

    #[validate(length(min = 1, max = 50))]
    pub bhk_type: String,

    #[serde(default)]
    pub status: FlatStatus,

    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFloorPlanRequest {
    #[validate(length(min = 1, max = 50))]
    pub bhk_type: String,

    pub image_url: Option<String>,

    pub pdf_url: Option<String>,

    #[validate(range(min = 0.0))]
    pub carpet_area: Option<f64>,

    #[validate(range(min = 0.0))]
    pub uds_area: Option<f64>,
}

// --- Response DTOs, identifiers rendered as hex strings ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityResponse {
    pub id: String,
    pub name: String,
    pub city: String,
    pub starting_price: Option<f64>,
    pub image_url: Option<String>,
    pub amenities_images: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Community> for CommunityResponse {
    fn from(community: Community) -> Self {
        CommunityResponse {
            id: community.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: community.name,
            city: community.city,
            starting_price: community.starting_price,
            image_url: community.image_url,
            amenities_images: community.amenities_images,
            created_at: community.created_at,
            updated_at: community.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerResponse {
    pub id: String,
    pub name: String,
    pub community_id: String,
    pub images: Vec<String>,
    pub pdfs: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Tower> for TowerResponse {
    fn from(tower: Tower) -> Self {
        TowerResponse {
            id: tower.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: tower.name,
            community_id: tower.community_id,
            images: tower.images,
            pdfs: tower.pdfs,
            created_at: tower.created_at,
            updated_at: tower.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatResponse {
    pub id: String,
    pub number: String,
    pub tower_id: String,
    pub bhk_type: String,
    pub status: FlatStatus,
    pub images: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Flat> for FlatResponse {
    fn from(flat: Flat) -> Self {
        FlatResponse {
            id: flat.id.map(|id| id.to_hex()).unwrap_or_default(),
            number: flat.number,
            tower_id: flat.tower_id,
            bhk_type: flat.bhk_type,
            status: flat.status,
            images: flat.images,
            created_at: flat.created_at,
            updated_at: flat.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlanResponse {
    pub id: String,
    pub bhk_type: String,
    pub image_url: Option<String>,
    pub pdf_url: Option<String>,
    pub carpet_area: Option<f64>,
    pub uds_area: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<FloorPlan> for FloorPlanResponse {
    fn from(plan: FloorPlan) -> Self {
        FloorPlanResponse {
            id: plan.id.map(|id| id.to_hex()).unwrap_or_default(),
            bhk_type: plan.bhk_type,
            image_url: plan.image_url,
            pdf_url: plan.pdf_url,
            carpet_area: plan.carpet_area,
            uds_area: plan.uds_area,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}

/// Aggregated catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub communities: Vec<CommunityResponse>,
    pub towers: Vec<TowerResponse>,
    pub flats: Vec<FlatResponse>,
    pub floorplans: Vec<FloorPlanResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_negative_starting_price_rejected() {
        let req = CreateCommunityRequest {
            name: "Palm Grove".to_string(),
            city: "Pune".to_string(),
            starting_price: Some(-1.0),
            image_url: None,
            amenities_images: vec![],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let req = CreateCommunityRequest {
            name: "".to_string(),
            city: "Pune".to_string(),
            starting_price: None,
            image_url: None,
            amenities_images: vec![],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_negative_carpet_area_rejected() {
        let req = CreateFloorPlanRequest {
            bhk_type: "2BHK".to_string(),
            image_url: None,
            pdf_url: None,
            carpet_area: Some(-10.0),
            uds_area: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_community_id_rendered_as_string() {
        let community = Community {
            id: Some(bson::oid::ObjectId::parse_str("65f1a2b3c4d5e6f708192a3b").unwrap()),
            name: "Palm Grove".to_string(),
            city: "Pune".to_string(),
            starting_price: Some(4_500_000.0),
            image_url: None,
            amenities_images: vec![],
            created_at: None,
            updated_at: None,
        };
        let resp = CommunityResponse::from(community);
        assert_eq!(resp.id, "65f1a2b3c4d5e6f708192a3b");
        let value = serde_json::to_value(&resp).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["id"], "65f1a2b3c4d5e6f708192a3b");
    }
}
