use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A residential community (project) with its marketing assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Community {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub city: String,
    pub starting_price: Option<f64>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub amenities_images: Vec<String>,

    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// Owning community id, opaque string reference
    pub community_id: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub pdfs: Vec<String>,

    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Sales status of a unit, closed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlatStatus {
    #[default]
    Available,
    Booked,
    Sold,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flat {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub number: String,
    pub tower_id: String,
    pub bhk_type: String,
    #[serde(default)]
    pub status: FlatStatus,
    #[serde(default)]
    pub images: Vec<String>,

    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlan {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub bhk_type: String,
    pub image_url: Option<String>,
    pub pdf_url: Option<String>,
    pub carpet_area: Option<f64>,
    pub uds_area: Option<f64>,

    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_status_wire_names() {
        assert_eq!(serde_json::to_string(&FlatStatus::Available).unwrap(), "\"available\"");
        assert_eq!(serde_json::to_string(&FlatStatus::Booked).unwrap(), "\"booked\"");
        assert_eq!(serde_json::to_string(&FlatStatus::Sold).unwrap(), "\"sold\"");
    }

    #[test]
    fn test_flat_status_rejects_unknown_value() {
        let res: Result<FlatStatus, _> = serde_json::from_str("\"demolished\"");
        assert!(res.is_err());
    }

    #[test]
    fn test_flat_status_defaults_to_available() {
        assert_eq!(FlatStatus::default(), FlatStatus::Available);
    }
}
