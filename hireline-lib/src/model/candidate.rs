//! Candidate record

use serde::Deserialize;
use serde::Serialize;

use super::Address;
use super::Education;
use super::Experience;
use super::StructuredField;

/// A candidate as returned by `GET /candidate/getAllCandidates`.
///
/// `id` is unique within a loaded collection; every other field is optional
/// and must be defaulted before display. Records are fetched wholesale,
/// mutated only by round-trips to the backend, and discarded on navigation —
/// there is no client-side persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub id: i64,
    pub agency_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub headline: Option<String>,
    /// Status as the backend sends it: sometimes a numeric flag ("1"),
    /// sometimes a pipeline stage name ("Interview").
    pub status: Option<String>,
    pub role: Option<String>,
    pub rating: Option<String>,
    pub hmapproval: Option<String>,
    pub recruiter_status: Option<String>,
    pub current_company: Option<String>,
    pub current_ctc: Option<String>,
    pub expected_ctc: Option<String>,
    pub currency: Option<String>,
    pub skill: Vec<String>,
    pub summary: Option<String>,
    pub photo_url: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub education: StructuredField<Education>,
    pub experience: StructuredField<Experience>,
    pub address: StructuredField<Address>,
    pub created_at: Option<String>,
    /// Pre-formatted creation date, when the backend sends one.
    pub created_dt: Option<String>,
    pub updated_at: Option<String>,
}

impl Candidate {
    /// Full display name; missing parts are treated as empty.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    /// Avatar initials from the first characters of each name part.
    pub fn initials(&self) -> String {
        let mut initials = String::new();
        for part in [&self.first_name, &self.last_name] {
            if let Some(c) = part.as_deref().and_then(|s| s.chars().next()) {
                initials.extend(c.to_uppercase());
            }
        }
        initials
    }

    /// Skills joined with spaces, for substring search.
    pub fn skills_joined(&self) -> String {
        self.skill.join(" ")
    }

    /// The creation date to display: the backend's pre-formatted `created_dt`
    /// when present, otherwise the raw `created_at`.
    pub fn created_display(&self) -> Option<&str> {
        self.created_dt.as_deref().or(self.created_at.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let candidate: Candidate = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(candidate.id, 7);
        assert_eq!(candidate.full_name(), "");
        assert!(candidate.skill.is_empty());
        assert!(candidate.education.entries().is_empty());
    }

    #[test]
    fn test_deserialize_structured_fields_from_strings() {
        let json = r#"{
            "id": 1,
            "first_name": "Asha",
            "last_name": "Rao",
            "skill": ["Rust", "SQL"],
            "education": "[{\"degree\":\"BE\",\"institution\":\"PICT\"}]",
            "experience": "not json",
            "address": "[{\"city\":\"Pune\",\"state\":\"MH\"}]",
            "created_dt": "2024-01-05"
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.full_name(), "Asha Rao");
        assert_eq!(candidate.initials(), "AR");
        assert_eq!(candidate.skills_joined(), "Rust SQL");
        assert_eq!(candidate.education.entries().len(), 1);
        assert!(candidate.experience.entries().is_empty());
        assert_eq!(candidate.created_display(), Some("2024-01-05"));
    }
}
