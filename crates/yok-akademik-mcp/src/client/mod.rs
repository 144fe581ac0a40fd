//! YOK Akademik API client.
//!
//! Thin async HTTP client: one outbound POST per call, a configurable
//! timeout, and nothing else. The backend owns retrying, caching, and
//! session lifetimes; this connector deliberately does none of that.

use reqwest::Client;
use url::Url;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{CollaboratorsResponse, SearchRequest, SearchResponse};

/// Decoded collaborator response paired with the body it was decoded
/// from.
///
/// Failure texts echo the backend's exact payload, including keys the
/// typed model does not declare, so the original value is carried
/// alongside the typed view.
#[derive(Debug, Clone)]
pub struct CollaboratorsReply {
    /// Typed view of the response.
    pub response: CollaboratorsResponse,

    /// The response body as received.
    pub raw: serde_json::Value,
}

/// YOK Akademik API client.
#[derive(Clone)]
pub struct YokAkademikClient {
    /// HTTP client.
    client: Client,

    /// Backend base URL.
    base_url: String,

    /// Request timeout, kept for timeout error reporting.
    request_timeout: std::time::Duration,
}

impl YokAkademikClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or HTTP client
    /// initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        // Fail fast on a malformed base URL instead of on the first call.
        Url::parse(&config.base_url).map_err(ClientError::InvalidBaseUrl)?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json".parse().expect("valid content-type header"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self { client, base_url: config.base_url, request_timeout: config.request_timeout })
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search for academic profiles.
    ///
    /// `POST {base_url}/api/search` with only the supplied filter keys.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, timeout, non-2xx status, or
    /// an undecodable response body.
    pub async fn search_profiles(&self, request: &SearchRequest) -> ClientResult<SearchResponse> {
        let url = format!("{}/api/search", self.base_url);
        let body = serde_json::to_value(request)?;
        self.post(&url, &body).await
    }

    /// Fetch collaborators for a profile within a search session.
    ///
    /// `POST {base_url}/api/collaborators/{sessionId}` with `{profileId}`.
    /// The session token is caller-supplied and passed through verbatim.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, timeout, non-2xx status, or
    /// an undecodable response body.
    pub async fn collaborators(
        &self,
        session_id: &str,
        profile_id: i64,
    ) -> ClientResult<CollaboratorsReply> {
        let url = format!("{}/api/collaborators/{}", self.base_url, session_id);
        let body = serde_json::json!({ "profileId": profile_id });
        let raw = self.post_value(&url, &body).await?;
        let response = serde_json::from_value(raw.clone())?;
        Ok(CollaboratorsReply { response, raw })
    }

    /// Make a POST request with a JSON body.
    async fn post<T>(&self, url: &str, body: &serde_json::Value) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.post_value(url, body).await?;
        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Make a POST request with a JSON body, returning the undecoded
    /// response value.
    async fn post_value(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> ClientResult<serde_json::Value> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let response = Self::handle_response(response).await?;
        response.json().await.map_err(|e| self.map_transport_error(e))
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        match status.as_u16() {
            500..=599 => Err(ClientError::server(status.as_u16(), text)),
            _ => Err(ClientError::unexpected(status.as_u16(), text)),
        }
    }

    /// Surface timeouts as their own variant; everything else stays a
    /// plain transport error.
    fn map_transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.request_timeout)
        } else {
            ClientError::Http(err)
        }
    }
}

impl std::fmt::Debug for YokAkademikClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YokAkademikClient").field("base_url", &self.base_url).finish()
    }
}
