//! Main HirelineClient

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use reqwest::Method;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::error::Error;

/// The main client for the Hireline backend.
///
/// The base URL is injected here once instead of being hard-coded at every
/// call site. The client is cheap to clone (uses `Arc` internally) and can be
/// shared across threads safely.
///
/// # Example
///
/// ```ignore
/// use hireline_lib::HirelineClient;
///
/// let client = HirelineClient::builder()
///     .base_url("http://ats.internal:3000")
///     .build()?;
///
/// let candidates = client.list_candidates().await?;
/// ```
#[derive(Clone)]
pub struct HirelineClient {
    inner: Arc<HirelineClientInner>,
}

struct HirelineClientInner {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl HirelineClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> HirelineClientBuilder<Missing> {
        HirelineClientBuilder::new()
    }

    /// Returns the base URL of the backend.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url.trim_end_matches('/'), path)
    }

    /// Makes an HTTP request against the backend.
    ///
    /// This is the low-level request method used by all API operations.
    /// Non-2xx responses become [`ApiError::Http`] with the response body as
    /// the message; there are no retries, so a failed call surfaces exactly
    /// once and the caller's state is left untouched.
    pub(crate) async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<reqwest::Response, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        if body.is_some() {
            headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        }

        debug!("{} {}", method, url);

        let mut request = self.inner.http_client.request(method, url).headers(headers);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| self.send_error(e))?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            debug!("request failed: HTTP {} {}", status.as_u16(), message);
            Err(ApiError::http(status.as_u16(), message).into())
        }
    }

    /// Maps a send failure to the error taxonomy: an elapsed request
    /// deadline is [`ApiError::Timeout`], everything else on the wire is
    /// [`ApiError::Network`].
    pub(crate) fn send_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Api(ApiError::Timeout(self.inner.timeout.unwrap_or_default()))
        } else {
            Error::Api(ApiError::Network(err))
        }
    }

    /// Decodes a successful response body as JSON.
    ///
    /// An undecodable body is a backend contract violation, not a transport
    /// failure, so it surfaces as [`ApiError::Parse`] carrying the raw body.
    pub(crate) async fn decode_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, Error> {
        let body = response.text().await.map_err(ApiError::from)?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), body).into())
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.inner.http_client
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`HirelineClient`].
///
/// Uses the typestate pattern so the one required field, the base URL, is
/// enforced at compile time.
///
/// # Example
///
/// ```ignore
/// let client = HirelineClient::builder()
///     .base_url("http://ats.internal:3000")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct HirelineClientBuilder<BaseUrl> {
    base_url: BaseUrl,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl HirelineClientBuilder<Missing> {
    fn new() -> Self {
        Self {
            base_url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the backend base URL (required).
    pub fn base_url(self, url: impl Into<String>) -> HirelineClientBuilder<Set<String>> {
        HirelineClientBuilder {
            base_url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<BaseUrl> HirelineClientBuilder<BaseUrl> {
    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Supplies a custom `reqwest::Client` instead of the default.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl HirelineClientBuilder<Set<String>> {
    /// Builds the client, validating the base URL.
    pub fn build(self) -> Result<HirelineClient, Error> {
        let Set(base_url) = self.base_url;

        let parsed = Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                base_url,
                parsed.scheme()
            ))
            .into());
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(connect_timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(connect_timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(HirelineClient {
            inner: Arc::new(HirelineClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::io::Write;
    use std::net::TcpListener;

    use super::*;

    /// Serves a single raw HTTP response on a local port and returns the
    /// base URL pointing at it.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_build_url_trims_trailing_slash() {
        let client = HirelineClient::builder()
            .base_url("http://ats.internal:3000/")
            .build()
            .unwrap();
        assert_eq!(
            client.build_url("/candidate/getAllCandidates"),
            "http://ats.internal:3000/candidate/getAllCandidates"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = HirelineClient::builder()
            .base_url("ats.internal:3000")
            .build()
            .err()
            .expect("non-http scheme must be rejected");
        assert!(matches!(err, Error::Api(ApiError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = HirelineClient::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        let err = client.delete_candidate(1).await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Network(_))));
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_parse_error() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
             Content-Length: 8\r\nConnection: close\r\n\r\nnot json",
        );
        let client = HirelineClient::builder().base_url(base).build().unwrap();
        let err = client.list_candidates().await.unwrap_err();
        match err {
            Error::Api(ApiError::Parse { body, .. }) => {
                assert_eq!(body.as_deref(), Some("not json"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stalled_response_is_timeout_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                std::thread::sleep(Duration::from_secs(2));
            }
        });

        let client = HirelineClient::builder()
            .base_url(format!("http://{}", addr))
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let err = client.list_candidates().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Timeout(_))));
    }
}
