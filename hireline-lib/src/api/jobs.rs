//! Job posting operations

use reqwest::Method;
use reqwest::multipart::Form;
use reqwest::multipart::Part;

use crate::HirelineClient;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Job;
use crate::model::JobForm;

impl HirelineClient {
    /// Fetches a single job posting.
    pub async fn get_job(&self, id: i64) -> Result<Job, Error> {
        let url = self.build_url(&format!("/api/jobs/{}", id));
        let response = self.request(Method::GET, &url, None).await?;
        let job: Job = self.decode_json(response).await?;
        Ok(job)
    }

    /// Creates a job posting. The form is validated first; on validation
    /// failure nothing is sent.
    pub async fn create_job(&self, form: &JobForm) -> Result<(), Error> {
        form.validate()?;
        let body = serde_json::to_string(form)?;
        let url = self.build_url("/jobs/createJob");
        self.request(Method::POST, &url, Some(body)).await?;
        Ok(())
    }

    /// Updates an existing job posting. Validated like
    /// [`create_job`](HirelineClient::create_job).
    pub async fn update_job(&self, id: i64, form: &JobForm) -> Result<(), Error> {
        form.validate()?;
        let body = serde_json::to_string(form)?;
        let url = self.build_url(&format!("/api/jobs/{}", id));
        self.request(Method::PUT, &url, Some(body)).await?;
        Ok(())
    }

    /// Uploads a job description file and returns the fields the backend
    /// extracted from it, for prefilling the posting form.
    pub async fn extract_job(&self, file_name: &str, bytes: Vec<u8>) -> Result<Job, Error> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let url = self.build_url("/jobs/extractJob");
        let mut request = self.http_client().post(&url).multipart(form);
        if let Some(timeout) = self.timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.send_error(e))?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status.as_u16(), message).into());
        }

        let extracted: Job = self.decode_json(response).await?;
        Ok(extracted)
    }
}
