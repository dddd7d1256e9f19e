use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A prospective customer tracked through the sales pipeline.
///
/// `status` and the assignment fields are free-form strings: the pipeline
/// stages are owned by the frontend and no transition rules are enforced
/// here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub assigned_agent_id: Option<String>,
    pub assigned_manager_id: Option<String>,
    pub requirement_type: Option<String>,
    pub source: Option<String>,
    pub status: String,
    /// Follow-up ids in creation order
    #[serde(default)]
    pub follow_up_ids: Vec<String>,

    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Interaction channel of a follow-up, closed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpKind {
    #[default]
    Call,
    Visit,
    Whatsapp,
}

/// A logged interaction or task tied to a Lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUp {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    /// Owning lead id, stored as its hex string form
    pub lead_id: String,
    pub notes: String,
    /// ISO date string for the next planned action
    pub next_date: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: FollowUpKind,
    pub agent_id: Option<String>,

    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
