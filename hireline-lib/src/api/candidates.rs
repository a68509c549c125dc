//! Candidate operations
//!
//! Listing, deletion, and bulk field edits. Mutations perform no local state
//! updates; callers refetch the roster afterwards so every derived view picks
//! the change up without special-casing.

use reqwest::Method;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeStruct;

use crate::HirelineClient;
use crate::api::ListEnvelope;
use crate::error::Error;
use crate::error::FieldValidationError;
use crate::error::ValidationError;
use crate::model::Candidate;

/// What a bulk edit does to one field.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkAction {
    /// Set the field to the given value on every selected record.
    ChangeTo(String),
    /// Blank the field on every selected record.
    Clear,
}

/// One row of a bulk field edit.
///
/// On the wire, `Clear` is normalized to `change_to` with an empty value;
/// that is the contract the backend's bulk endpoint accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkFieldUpdate {
    /// The candidate field to edit (e.g. `"rating"`, `"current_ctc"`).
    pub field: String,
    /// The edit to apply.
    pub action: BulkAction,
}

impl BulkFieldUpdate {
    /// Creates a `change_to` edit.
    pub fn change_to(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            action: BulkAction::ChangeTo(value.into()),
        }
    }

    /// Creates a `clear` edit.
    pub fn clear(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            action: BulkAction::Clear,
        }
    }
}

impl Serialize for BulkFieldUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_struct("BulkFieldUpdate", 3)?;
        row.serialize_field("field", &self.field)?;
        match &self.action {
            BulkAction::ChangeTo(value) => {
                row.serialize_field("action", "change_to")?;
                row.serialize_field("value", value)?;
            }
            BulkAction::Clear => {
                row.serialize_field("action", "change_to")?;
                row.serialize_field("value", "")?;
            }
        }
        row.end()
    }
}

#[derive(Debug, Serialize)]
struct BulkUpdateBody<'a> {
    ids: &'a [i64],
    updates: &'a [BulkFieldUpdate],
}

impl HirelineClient {
    /// Fetches the full candidate roster.
    pub async fn list_candidates(&self) -> Result<Vec<Candidate>, Error> {
        let url = self.build_url("/candidate/getAllCandidates");
        let response = self.request(Method::GET, &url, None).await?;
        let envelope: ListEnvelope<Candidate> = self.decode_json(response).await?;
        Ok(envelope.into_result())
    }

    /// Deletes a candidate by id.
    pub async fn delete_candidate(&self, id: i64) -> Result<(), Error> {
        let url = self.build_url(&format!("/candidate/{}", id));
        self.request(Method::DELETE, &url, None).await?;
        Ok(())
    }

    /// Applies the same field edits to every candidate in `ids`.
    ///
    /// Validated before anything is sent: ids must be non-empty, every row
    /// must name a field, and `change_to` rows need a non-empty value.
    pub async fn bulk_update_candidates(
        &self,
        ids: &[i64],
        updates: &[BulkFieldUpdate],
    ) -> Result<(), Error> {
        validate_bulk_update(ids, updates)?;

        let body = serde_json::to_string(&BulkUpdateBody { ids, updates })?;
        let url = self.build_url("/candidate/bulk-update");
        self.request(Method::POST, &url, Some(body)).await?;
        Ok(())
    }
}

fn validate_bulk_update(ids: &[i64], updates: &[BulkFieldUpdate]) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    if ids.is_empty() {
        errors.push(FieldValidationError::new("ids", "Select at least one candidate."));
    }
    if updates.is_empty() {
        errors.push(FieldValidationError::new("updates", "Add at least one field edit."));
    }
    for update in updates {
        if update.field.trim().is_empty() {
            errors.push(FieldValidationError::new(
                "field",
                "Please select a field for every row.",
            ));
        } else if let BulkAction::ChangeTo(value) = &update.action
            && value.trim().is_empty()
        {
            errors.push(FieldValidationError::new(
                update.field.clone(),
                format!("Please supply a value for \"{}\".", update.field),
            ));
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}
