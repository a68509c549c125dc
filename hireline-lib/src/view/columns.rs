//! Table columns and cell projection

use crate::model::Candidate;
use crate::model::format_address;

/// A column of the candidate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Email,
    Phone,
    Status,
    Role,
    Created,
    Company,
    Skills,
    Education,
    Rating,
    Address,
}

impl Column {
    /// All columns, in table order.
    pub const ALL: [Column; 11] = [
        Column::Name,
        Column::Email,
        Column::Phone,
        Column::Status,
        Column::Role,
        Column::Created,
        Column::Company,
        Column::Skills,
        Column::Education,
        Column::Rating,
        Column::Address,
    ];

    /// The stable key used for column-visibility state.
    pub fn key(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Email => "email",
            Column::Phone => "phone",
            Column::Status => "status",
            Column::Role => "role",
            Column::Created => "created_at",
            Column::Company => "current_company",
            Column::Skills => "skill",
            Column::Education => "education",
            Column::Rating => "rating",
            Column::Address => "address",
        }
    }

    /// The header label.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Email => "Email",
            Column::Phone => "Phone",
            Column::Status => "Status",
            Column::Role => "Role",
            Column::Created => "Created",
            Column::Company => "Company",
            Column::Skills => "Skills",
            Column::Education => "Education",
            Column::Rating => "Rating",
            Column::Address => "Address",
        }
    }

    /// The default visible set (every column).
    pub fn default_visible() -> Vec<Column> {
        Self::ALL.to_vec()
    }

    /// Projects one cell's display text. Missing data never fails; it
    /// renders as an empty string or `"N/A"` depending on the column.
    pub fn cell(&self, candidate: &Candidate) -> String {
        match self {
            Column::Name => candidate.full_name(),
            Column::Email => plain(&candidate.email),
            Column::Phone => plain(&candidate.phone),
            Column::Status => status_cell(&candidate.status),
            Column::Role => plain(&candidate.role),
            Column::Created => candidate.created_display().unwrap_or_default().to_string(),
            Column::Company => candidate
                .current_company
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            Column::Skills => skills_cell(&candidate.skill),
            Column::Education => education_cell(candidate),
            Column::Rating => candidate
                .rating
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            Column::Address => format_address(&candidate.address),
        }
    }
}

fn plain(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Status arrives either as a numeric active flag or a pipeline stage name.
/// Numeric values map to Active/Inactive; stage names pass through verbatim.
fn status_cell(status: &Option<String>) -> String {
    let raw = status.as_deref().unwrap_or("").trim();
    if raw.is_empty() {
        return "Inactive".to_string();
    }
    match raw.parse::<f64>() {
        Ok(flag) if flag == 1.0 => "Active".to_string(),
        Ok(_) => "Inactive".to_string(),
        Err(_) => raw.to_string(),
    }
}

/// First two skills, with a `+n` overflow marker.
fn skills_cell(skills: &[String]) -> String {
    let mut cell = skills
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if skills.len() > 2 {
        cell.push_str(&format!(" +{}", skills.len() - 2));
    }
    cell
}

fn education_cell(candidate: &Candidate) -> String {
    let entries = candidate.education.entries();
    let Some(first) = entries.first() else {
        return "N/A".to_string();
    };
    let institution = first
        .institution
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("N/A");
    let degree = first.degree.as_deref().unwrap_or("");
    format!("{} {}", institution, degree).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StructuredField;

    #[test]
    fn test_status_cell() {
        assert_eq!(status_cell(&Some("1".to_string())), "Active");
        assert_eq!(status_cell(&Some("0".to_string())), "Inactive");
        assert_eq!(status_cell(&Some("Interview".to_string())), "Interview");
        assert_eq!(status_cell(&None), "Inactive");
    }

    #[test]
    fn test_skills_cell_overflow() {
        let skills: Vec<String> = ["Rust", "SQL", "Go", "C"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(skills_cell(&skills), "Rust, SQL +2");
        assert_eq!(skills_cell(&skills[..2]), "Rust, SQL");
        assert_eq!(skills_cell(&[]), "");
    }

    #[test]
    fn test_education_cell_uses_first_entry() {
        let candidate = Candidate {
            id: 1,
            education: StructuredField::Unparsed(
                r#"[{"institution":"PICT","degree":"BE"},{"institution":"IIT"}]"#.to_string(),
            ),
            ..Default::default()
        };
        assert_eq!(Column::Education.cell(&candidate), "PICT BE");
        assert_eq!(Column::Education.cell(&Candidate::default()), "N/A");
    }

    #[test]
    fn test_missing_fields_default_per_column() {
        let blank = Candidate::default();
        assert_eq!(Column::Company.cell(&blank), "N/A");
        assert_eq!(Column::Rating.cell(&blank), "N/A");
        assert_eq!(Column::Address.cell(&blank), "NA");
        assert_eq!(Column::Email.cell(&blank), "");
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Column::ALL.iter().map(Column::key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Column::ALL.len());
    }
}
