//! Filter criteria for the candidate roster

use crate::model::Candidate;

/// Which search tab is active. Each tab scopes the text query to a different
/// field; role and agency narrowing apply on every tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchTab {
    /// Search across name, skills, current company, and email.
    #[default]
    All,
    /// Search the pipeline status field.
    Status,
    /// Search the recruiter status field.
    Recruiter,
    /// Search the hiring-manager approval field.
    HmApproval,
    /// Numeric range over current CTC (`"3-7"`), or substring fallback.
    CtcRange,
}

/// User-chosen filter criteria for the roster.
///
/// # Example
///
/// ```
/// use hireline_lib::view::FilterCriteria;
///
/// let criteria = FilterCriteria::new()
///     .with_query("rust")
///     .with_role("Recruiter");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Free-text query; blank after trimming matches everything.
    pub text_query: String,
    /// Exact, case-sensitive role filter.
    pub role: Option<String>,
    /// Agency filter, matched against the record's `agency_id`.
    pub agency_id: Option<i64>,
    /// The active search tab.
    pub tab: SearchTab,
}

impl FilterCriteria {
    /// Creates empty criteria (matches every record).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.text_query = query.into();
        self
    }

    /// Sets the role filter.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the agency filter.
    pub fn with_agency(mut self, agency_id: i64) -> Self {
        self.agency_id = Some(agency_id);
        self
    }

    /// Sets the search tab.
    pub fn on_tab(mut self, tab: SearchTab) -> Self {
        self.tab = tab;
        self
    }

    /// Clears the query and both dropdown filters.
    pub fn clear(&mut self) {
        self.text_query.clear();
        self.role = None;
        self.agency_id = None;
    }

    /// Whether a record passes these criteria. Absent fields are treated as
    /// empty strings; nothing here can fail.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        if let Some(role) = &self.role
            && candidate.role.as_deref() != Some(role.as_str())
        {
            return false;
        }
        if let Some(agency_id) = self.agency_id
            && candidate.agency_id != Some(agency_id)
        {
            return false;
        }

        let term = self.text_query.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        match self.tab {
            SearchTab::All => {
                contains(&candidate.full_name(), &term)
                    || contains(&candidate.skills_joined(), &term)
                    || opt_contains(&candidate.current_company, &term)
                    || opt_contains(&candidate.email, &term)
            }
            SearchTab::Status => opt_contains(&candidate.status, &term),
            SearchTab::Recruiter => opt_contains(&candidate.recruiter_status, &term),
            SearchTab::HmApproval => opt_contains(&candidate.hmapproval, &term),
            SearchTab::CtcRange => ctc_matches(&candidate.current_ctc, &term),
        }
    }
}

fn contains(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

fn opt_contains(haystack: &Option<String>, term: &str) -> bool {
    haystack.as_deref().is_some_and(|s| contains(s, term))
}

/// CTC search: a `min-max` term is a numeric range over the parsed CTC;
/// anything else falls back to a substring probe on the raw value.
fn ctc_matches(ctc: &Option<String>, term: &str) -> bool {
    if let Some((min, max)) = term.split_once('-')
        && let (Ok(min), Ok(max)) = (min.trim().parse::<f64>(), max.trim().parse::<f64>())
    {
        return ctc
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .is_some_and(|value| value >= min && value <= max);
    }
    opt_contains(ctc, term)
}
