use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::lead::{FollowUp, FollowUpKind, Lead};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLeadRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 6, max = 20))]
    pub phone: String,

    #[validate(email)]
    pub email: Option<String>,

    /// Accepted from the intake form but not persisted on the lead record
    pub project_id: Option<String>,

    pub requirement_type: Option<String>,

    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadCreatedResponse {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListLeadsQuery {
    pub assigned_to: Option<String>,
}

/// Partial update of a lead; absent fields are left untouched.
/// Status and assignment values are deliberately unconstrained strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateLeadRequest {
    pub status: Option<String>,
    pub assigned_agent_id: Option<String>,
    pub assigned_manager_id: Option<String>,
}

impl UpdateLeadRequest {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.assigned_agent_id.is_none()
            && self.assigned_manager_id.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadUpdatedResponse {
    pub updated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadResponse {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub assigned_agent_id: Option<String>,
    pub assigned_manager_id: Option<String>,
    pub requirement_type: Option<String>,
    pub source: Option<String>,
    pub status: String,
    pub follow_up_ids: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        LeadResponse {
            id: lead.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: lead.name,
            phone: lead.phone,
            email: lead.email,
            assigned_agent_id: lead.assigned_agent_id,
            assigned_manager_id: lead.assigned_manager_id,
            requirement_type: lead.requirement_type,
            source: lead.source,
            status: lead.status,
            follow_up_ids: lead.follow_up_ids,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFollowUpRequest {
    pub lead_id: String,

    #[validate(length(min = 1, max = 2000))]
    pub notes: String,

    /// ISO date string
    pub next_date: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: FollowUpKind,

    pub agent_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUpResponse {
    pub id: String,
    pub lead_id: String,
    pub notes: String,
    pub next_date: Option<String>,
    #[serde(rename = "type")]
    pub kind: FollowUpKind,
    pub agent_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<FollowUp> for FollowUpResponse {
    fn from(followup: FollowUp) -> Self {
        FollowUpResponse {
            id: followup.id.map(|id| id.to_hex()).unwrap_or_default(),
            lead_id: followup.lead_id,
            notes: followup.notes,
            next_date: followup.next_date,
            kind: followup.kind,
            agent_id: followup.agent_id,
            created_at: followup.created_at,
            updated_at: followup.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_request_requires_phone_length() {
        let req = CreateLeadRequest {
            name: "Asha Verma".to_string(),
            phone: "123".to_string(),
            email: None,
            project_id: None,
            requirement_type: None,
            source: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_lead_request_rejects_bad_email() {
        let req = CreateLeadRequest {
            name: "Asha Verma".to_string(),
            phone: "9876543210".to_string(),
            email: Some("not-an-email".to_string()),
            project_id: None,
            requirement_type: None,
            source: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_lead_request_valid() {
        let req = CreateLeadRequest {
            name: "Asha Verma".to_string(),
            phone: "9876543210".to_string(),
            email: Some("asha@example.com".to_string()),
            project_id: None,
            requirement_type: Some("Interior".to_string()),
            source: Some("web".to_string()),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_request_empty_detection() {
        let req = UpdateLeadRequest::default();
        assert!(req.is_empty());

        let req = UpdateLeadRequest {
            status: Some("Contacted".to_string()),
            ..Default::default()
        };
        assert!(!req.is_empty());
    }

    #[test]
    fn test_follow_up_request_defaults_to_call() {
        let req: CreateFollowUpRequest = serde_json::from_str(
            r#"{"lead_id": "65f1a2b3c4d5e6f708192a3b", "notes": "Spoke on phone"}"#,
        )
        .unwrap();
        assert_eq!(req.kind, FollowUpKind::Call);
    }

    #[test]
    fn test_follow_up_request_empty_notes_rejected() {
        let req = CreateFollowUpRequest {
            lead_id: "65f1a2b3c4d5e6f708192a3b".to_string(),
            notes: "".to_string(),
            next_date: None,
            kind: FollowUpKind::Call,
            agent_id: None,
        };
        assert!(req.validate().is_err());
    }
}
