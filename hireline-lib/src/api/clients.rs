//! Client company operations

use reqwest::Method;

use crate::HirelineClient;
use crate::api::ListEnvelope;
use crate::error::Error;
use crate::model::ClientOrg;
use crate::model::ClientOrgUpdate;

impl HirelineClient {
    /// Fetches all client companies.
    pub async fn list_clients(&self) -> Result<Vec<ClientOrg>, Error> {
        let url = self.build_url("/client/getAllClient");
        let response = self.request(Method::GET, &url, None).await?;
        let envelope: ListEnvelope<ClientOrg> = self.decode_json(response).await?;
        Ok(envelope.into_result())
    }

    /// Applies a partial update to a client company and returns the updated
    /// record.
    pub async fn update_client(
        &self,
        id: i64,
        patch: &ClientOrgUpdate,
    ) -> Result<ClientOrg, Error> {
        let body = serde_json::to_string(patch)?;
        let url = self.build_url(&format!("/client/{}", id));
        let response = self.request(Method::PUT, &url, Some(body)).await?;
        let updated: ClientOrg = self.decode_json(response).await?;
        Ok(updated)
    }

    /// Deletes a client company by id.
    pub async fn delete_client(&self, id: i64) -> Result<(), Error> {
        let url = self.build_url(&format!("/client/{}", id));
        self.request(Method::DELETE, &url, None).await?;
        Ok(())
    }
}
