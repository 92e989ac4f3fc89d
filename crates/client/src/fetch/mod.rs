//! HTTP fetch client used to talk to the icon finder service.
//!
//! - Redirects are limited (default: 5)
//! - Response bodies are capped (default: 1MB, configurable)
//! - Requests time out (default: 20s, configurable)

use bytes::Bytes;
use reqwest::{Client, StatusCode, Url, header};
use std::time::{Duration, Instant};

use iconbatch_core::{AppConfig, Error};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "iconbatch/0.1")
    pub user_agent: String,

    /// Maximum response body size in bytes (default: 1MB)
    pub max_bytes: usize,

    /// Request timeout (default: 20s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 5)
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "iconbatch/0.1".to_string(),
            max_bytes: 1024 * 1024,
            timeout: Duration::from_millis(20000),
            max_redirects: 5,
        }
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            max_bytes: config.max_bytes,
            timeout: config.timeout(),
            ..Default::default()
        }
    }
}

/// Response from a fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// The final URL after redirects
    pub final_url: Url,
    /// HTTP status code
    pub status: StatusCode,
    /// Content-Type header
    pub content_type: Option<String>,
    /// Response body bytes
    pub bytes: Bytes,
    /// Time taken to fetch in milliseconds
    pub fetch_ms: u64,
}

/// HTTP fetch client with size and time limits.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: Client,
    config: FetchConfig,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// GET `url`, returning the body and metadata.
    ///
    /// Non-success statuses and bodies over `max_bytes` are errors.
    pub async fn fetch(&self, url: &Url, accept: &str) -> Result<FetchResponse, Error> {
        let start = Instant::now();

        let response = self
            .http
            .get(url.as_str())
            .header(header::ACCEPT, accept)
            .send()
            .await
            .map_err(|e| map_reqwest_error(url, e))?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::HttpError(format!("status {} from {}", status.as_u16(), url)));
        }

        if let Some(len) = response.content_length()
            && len as usize > self.config.max_bytes
        {
            return Err(Error::FetchTooLarge(format!("{} bytes exceeds {}", len, self.config.max_bytes)));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response.bytes().await.map_err(|e| map_reqwest_error(url, e))?;

        if bytes.len() > self.config.max_bytes {
            return Err(Error::FetchTooLarge(format!("{} bytes exceeds {}", bytes.len(), self.config.max_bytes)));
        }

        let fetch_ms = start.elapsed().as_millis() as u64;

        tracing::debug!("fetched {} -> {} in {}ms ({} bytes)", url, final_url, fetch_ms, bytes.len());

        Ok(FetchResponse { final_url, status, content_type, bytes, fetch_ms })
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

fn map_reqwest_error(url: &Url, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::FetchTimeout(format!("{url}: {err}"))
    } else {
        Error::HttpError(format!("network error: {err}"))
    }
}
