//! Client company and prospect records

use serde::Deserialize;
use serde::Serialize;

/// An active client company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOrg {
    pub id: i64,
    pub name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub active_jobs: Option<i64>,
    pub total_hires: Option<i64>,
    pub joined_date: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub careers_page: Option<String>,
    pub tags: Vec<String>,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zipcode: Option<String>,
    pub size: Option<i64>,
    pub currency: Option<String>,
    pub revenue: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A prospect in the pipeline (not yet a client).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prospect {
    pub id: i64,
    pub name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub potential_value: Option<String>,
    pub last_contact: Option<String>,
    pub next_follow_up: Option<String>,
    pub source: Option<String>,
    pub interest_level: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Partial update body for `PUT /client/{id}`.
///
/// Only set fields are sent; the backend leaves the rest untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientOrgUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub careers_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prospect_tolerates_sparse_payloads() {
        let prospect: Prospect = serde_json::from_str(
            r#"{"id": 7, "name": "Globex", "interest_level": 4, "status": "warm"}"#,
        )
        .unwrap();
        assert_eq!(prospect.id, 7);
        assert_eq!(prospect.name, "Globex");
        assert_eq!(prospect.interest_level, Some(4));
        assert_eq!(prospect.status.as_deref(), Some("warm"));
        assert_eq!(prospect.next_follow_up, None);
    }

    #[test]
    fn test_update_body_skips_unset_fields() {
        let patch = ClientOrgUpdate {
            name: Some("Initech".to_string()),
            size: Some(250),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Initech", "size": 250}));
    }
}
