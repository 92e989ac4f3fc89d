//! Icon finder backed by a remote icon discovery service.
//!
//! The service is asked for every candidate icon of a page:
//!
//! ```text
//! GET {base}/allicons.json?url=<page url>
//! { "url": "...", "title": "...", "icons": [{ "url", "width", "height", "format", "bytes" }] }
//! ```
//!
//! Candidates are ranked locally and only the best one is returned.

use async_trait::async_trait;
use url::Url;
use serde::Deserialize;

use iconbatch_core::{AppConfig, Error, FinderOutcome, IconDescriptor, IconFinder, IconFormat};

use crate::fetch::{FetchClient, FetchConfig};
use crate::ranking::best_icon;

#[derive(Debug, Deserialize)]
struct AllIconsResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    icons: Vec<RemoteIcon>,
}

#[derive(Debug, Deserialize)]
struct RemoteIcon {
    url: String,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    format: String,
    #[serde(default)]
    bytes: u64,
}

impl From<RemoteIcon> for IconDescriptor {
    fn from(icon: RemoteIcon) -> Self {
        IconDescriptor {
            format: IconFormat::from_tag(&icon.format),
            url: icon.url,
            width: icon.width,
            height: icon.height,
            bytes: icon.bytes,
        }
    }
}

/// [`IconFinder`] that delegates discovery to a remote service.
#[derive(Debug, Clone)]
pub struct RemoteIconFinder {
    client: FetchClient,
    endpoint: Url,
}

impl RemoteIconFinder {
    /// Create a finder talking to the service rooted at `base_url`.
    pub fn new(base_url: &str, fetch: FetchConfig) -> Result<Self, Error> {
        let base = Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        let endpoint = base
            .join("allicons.json")
            .map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        let client = FetchClient::new(fetch)?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        Self::new(&config.finder_url, FetchConfig::from(config))
    }

    /// Full request URL for looking up `page_url`.
    pub fn request_url(&self, page_url: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("url", page_url);
        url
    }
}

#[async_trait]
impl IconFinder for RemoteIconFinder {
    async fn fetch_icons_with_title(&self, url: &str) -> Result<FinderOutcome, Error> {
        let response = self.client.fetch(&self.request_url(url), "application/json").await?;

        let body: AllIconsResponse = serde_json::from_slice(&response.bytes)
            .map_err(|e| Error::FinderFailed(format!("undecodable response for {url}: {e}")))?;

        let candidates = body.icons.len();
        let icon = best_icon(body.icons.into_iter().map(IconDescriptor::from).collect());

        tracing::debug!(url, candidates, best = icon.as_ref().map(|i| i.url.as_str()), "icons ranked");

        Ok(FinderOutcome { title: body.title.unwrap_or_default(), icon })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, extract::Query, routing::get};
    use std::collections::HashMap;

    async fn allicons(Query(params): Query<HashMap<String, String>>) -> (axum::http::StatusCode, String) {
        let page = params.get("url").cloned().unwrap_or_default();
        match page.as_str() {
            "http://example.com" => (
                axum::http::StatusCode::OK,
                serde_json::json!({
                    "url": page,
                    "title": "Example Domain",
                    "icons": [
                        { "url": "http://example.com/apple-touch-icon.png", "width": 180, "height": 180, "format": "png", "bytes": 5000 },
                        { "url": "http://example.com/favicon.ico", "width": 32, "height": 32, "format": "ico", "bytes": 1150 }
                    ]
                })
                .to_string(),
            ),
            "http://empty.test" => (axum::http::StatusCode::OK, r#"{"url":"http://empty.test","icons":[]}"#.to_string()),
            "http://garbage.test" => (axum::http::StatusCode::OK, "<html>".to_string()),
            _ => (axum::http::StatusCode::NOT_FOUND, "not found".to_string()),
        }
    }

    async fn finder() -> RemoteIconFinder {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, Router::new().route("/allicons.json", get(allicons)))
                .await
                .unwrap();
        });
        RemoteIconFinder::new(&format!("http://{addr}/"), FetchConfig::default()).unwrap()
    }

    #[test]
    fn test_request_url_encodes_page() {
        let finder = RemoteIconFinder::new("http://finder.local/api/", FetchConfig::default()).unwrap();
        let url = finder.request_url("http://foo.com/bar?x=1&y=2");
        assert_eq!(url.path(), "/api/allicons.json");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("url".to_string(), "http://foo.com/bar?x=1&y=2".to_string())]);
    }

    #[test]
    fn test_invalid_base_url() {
        let result = RemoteIconFinder::new("not a url", FetchConfig::default());
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_remote_icon_defaults() {
        let icon: RemoteIcon = serde_json::from_str(r#"{"url":"http://a/f"}"#).unwrap();
        let descriptor = IconDescriptor::from(icon);
        assert_eq!(descriptor.width, 0);
        assert_eq!(descriptor.format, IconFormat::Other);
    }

    #[tokio::test]
    async fn test_picks_best_icon_and_title() {
        let finder = finder().await;
        let outcome = finder.fetch_icons_with_title("http://example.com").await.unwrap();

        assert_eq!(outcome.title, "Example Domain");
        assert_eq!(outcome.icon.unwrap().url, "http://example.com/favicon.ico");
    }

    #[tokio::test]
    async fn test_no_icons_no_title() {
        let finder = finder().await;
        let outcome = finder.fetch_icons_with_title("http://empty.test").await.unwrap();

        assert_eq!(outcome, FinderOutcome::default());
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let finder = finder().await;
        let result = finder.fetch_icons_with_title("http://garbage.test").await;
        assert!(matches!(result, Err(Error::FinderFailed(_))));
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let finder = finder().await;
        let result = finder.fetch_icons_with_title("http://unknown.test").await;
        assert!(matches!(result, Err(Error::HttpError(_))));
    }
}
