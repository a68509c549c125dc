//! Validation error types

/// Error information for a specific field that failed validation.
#[derive(Debug, Clone)]
pub struct FieldValidationError {
    /// The field that failed validation.
    pub field: String,
    /// Human-readable validation error message.
    pub message: String,
}

impl FieldValidationError {
    /// Creates a new field validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A form submission that failed validation.
///
/// Submission is blocked entirely; the first offending message is what the
/// caller surfaces to the user.
#[derive(Debug, Clone, thiserror::Error)]
pub struct ValidationError {
    /// All fields that failed, in form order.
    pub errors: Vec<FieldValidationError>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first_message())
    }
}

impl ValidationError {
    /// Creates a validation error from a non-empty list of field errors.
    pub fn new(errors: Vec<FieldValidationError>) -> Self {
        Self { errors }
    }

    /// Returns the first offending field's message.
    pub fn first_message(&self) -> String {
        self.errors
            .first()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "validation failed".to_string())
    }
}
