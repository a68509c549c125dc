//! Agency operations

use reqwest::Method;

use crate::HirelineClient;
use crate::api::ListEnvelope;
use crate::error::Error;
use crate::model::Agency;
use crate::model::AgencyBody;

impl HirelineClient {
    /// Fetches all agencies.
    pub async fn list_agencies(&self) -> Result<Vec<Agency>, Error> {
        let url = self.build_url("/agency/getAllAgencies");
        let response = self.request(Method::GET, &url, None).await?;
        let envelope: ListEnvelope<Agency> = self.decode_json(response).await?;
        Ok(envelope.into_result())
    }

    /// Creates an agency with the given name.
    pub async fn create_agency(&self, name: &str) -> Result<(), Error> {
        if name.trim().is_empty() {
            return Err(Error::InvalidOperation("agency name is empty".to_string()));
        }
        let body = serde_json::to_string(&AgencyBody { name })?;
        let url = self.build_url("/agency");
        self.request(Method::POST, &url, Some(body)).await?;
        Ok(())
    }

    /// Renames an existing agency.
    pub async fn rename_agency(&self, id: i64, name: &str) -> Result<(), Error> {
        if name.trim().is_empty() {
            return Err(Error::InvalidOperation("agency name is empty".to_string()));
        }
        let body = serde_json::to_string(&AgencyBody { name })?;
        let url = self.build_url(&format!("/agency/{}", id));
        self.request(Method::PUT, &url, Some(body)).await?;
        Ok(())
    }

    /// Deletes an agency by id.
    pub async fn delete_agency(&self, id: i64) -> Result<(), Error> {
        let url = self.build_url(&format!("/agency/{}", id));
        self.request(Method::DELETE, &url, None).await?;
        Ok(())
    }
}
