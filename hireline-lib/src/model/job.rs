//! Job posting records and the posting form

use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;

use crate::error::FieldValidationError;
use crate::error::ValidationError;

/// A job posting as returned by `GET /api/jobs/{id}` or JD extraction.
///
/// Salary bounds travel as strings; the backend does not promise a numeric
/// type for them on reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub id: i64,
    pub job_title: Option<String>,
    pub job_code: Option<String>,
    pub department: Option<String>,
    pub office_location: Option<String>,
    pub about: Option<String>,
    pub industry: Option<String>,
    pub job_function: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub education_level: Option<String>,
    pub salary_from: Option<String>,
    pub salary_to: Option<String>,
    pub salary_currency: Option<String>,
    pub company: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// The job posting form, submitted via `POST /jobs/createJob` or
/// `PUT /api/jobs/{id}` after [`validate`](JobForm::validate) passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobForm {
    pub job_title: String,
    pub job_code: String,
    pub department: String,
    pub office_location: String,
    pub about: String,
    pub industry: String,
    pub job_function: String,
    pub employment_type: String,
    pub experience_level: String,
    pub education_level: String,
    // The backend expects stringified salary bounds.
    #[serde(serialize_with = "serialize_as_string")]
    pub salary_from: f64,
    #[serde(serialize_with = "serialize_as_string")]
    pub salary_to: f64,
    pub salary_currency: String,
    pub company: String,
}

fn serialize_as_string<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

impl JobForm {
    /// Presence and range validation, in form order.
    ///
    /// On failure nothing is submitted; the error's first message is what the
    /// caller surfaces.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        require(&mut errors, "job_title", &self.job_title, "Job title is required.");
        require(&mut errors, "department", &self.department, "Department is required.");
        require(
            &mut errors,
            "office_location",
            &self.office_location,
            "Primary office location is required.",
        );
        require(&mut errors, "industry", &self.industry, "Industry is required.");
        require(
            &mut errors,
            "job_function",
            &self.job_function,
            "Job function is required.",
        );
        require(
            &mut errors,
            "employment_type",
            &self.employment_type,
            "Employment type is required.",
        );
        require(
            &mut errors,
            "experience_level",
            &self.experience_level,
            "Experience level is required.",
        );
        require(
            &mut errors,
            "education_level",
            &self.education_level,
            "Education level is required.",
        );
        if self.salary_from > self.salary_to && self.salary_to > 0.0 {
            errors.push(FieldValidationError::new(
                "salary",
                "Salary 'from' cannot be greater than 'to'.",
            ));
        }
        require(
            &mut errors,
            "salary_currency",
            &self.salary_currency,
            "Currency is required.",
        );
        require(&mut errors, "company", &self.company, "Company name is required.");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

fn require(errors: &mut Vec<FieldValidationError>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldValidationError::new(field, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> JobForm {
        JobForm {
            job_title: "Backend Engineer".to_string(),
            job_code: "BE-12".to_string(),
            department: "Engineering".to_string(),
            office_location: "Pune".to_string(),
            about: "Owns the candidate service.".to_string(),
            industry: "Software".to_string(),
            job_function: "Engineering".to_string(),
            employment_type: "Full-time".to_string(),
            experience_level: "Senior".to_string(),
            education_level: "Bachelors".to_string(),
            salary_from: 20.0,
            salary_to: 30.0,
            salary_currency: "INR".to_string(),
            company: "Initech".to_string(),
        }
    }

    #[test]
    fn test_filled_form_passes() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_missing_title_blocks_submission() {
        let mut form = filled_form();
        form.job_title = "  ".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.errors[0].field, "job_title");
        assert_eq!(err.first_message(), "job_title: Job title is required.");
    }

    #[test]
    fn test_reversed_salary_range_fails() {
        let mut form = filled_form();
        form.salary_from = 40.0;
        form.salary_to = 30.0;
        let err = form.validate().unwrap_err();
        assert_eq!(err.errors[0].field, "salary");
    }

    #[test]
    fn test_open_ended_salary_allowed() {
        // to == 0 means "not specified"; no range check applies.
        let mut form = filled_form();
        form.salary_from = 40.0;
        form.salary_to = 0.0;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_salary_serializes_as_strings() {
        let json = serde_json::to_value(filled_form()).unwrap();
        assert_eq!(json["salary_from"], "20");
        assert_eq!(json["salary_to"], "30");
    }
}
