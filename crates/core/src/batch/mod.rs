//! Batch icon lookups.
//!
//! [`BatchEngine`] owns the shared cache handle and the icon finder. Each
//! call to [`BatchEngine::process`] creates a [`BatchJob`] that fans the URLs
//! out to a bounded worker pool. Every worker consults the cache first and
//! falls back to the finder on a miss; successful fetches are written back to
//! the cache in a detached task.

pub mod job;
pub mod normalize;

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cache::{CacheDb, host_of};
use crate::{Error, IconFinder};

pub use job::{BatchJob, MAX_WORKERS, worker_count};
pub use normalize::normalize_url;

/// Outcome of looking up one URL.
///
/// Failed lookups carry empty `favicon` and `title`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct IconLookupResult {
    /// The normalized URL that was looked up.
    pub url: String,
    /// URL of the best icon, empty if none was found.
    pub favicon: String,
    /// Page title, empty when not requested or not found.
    pub title: String,
}

/// Cache-fronted icon lookups over a bounded worker pool.
#[derive(Clone)]
pub struct BatchEngine {
    cache: CacheDb,
    finder: Arc<dyn IconFinder>,
}

impl BatchEngine {
    pub fn new(cache: CacheDb, finder: Arc<dyn IconFinder>) -> Self {
        Self { cache, finder }
    }

    pub fn cache(&self) -> &CacheDb {
        &self.cache
    }

    /// Look up every URL in `urls`.
    ///
    /// Returns one result per input URL in completion order, not input order.
    /// An empty list returns an empty result without spawning workers.
    pub async fn process(&self, urls: Vec<String>, with_title: bool) -> Result<Vec<IconLookupResult>, Error> {
        BatchJob::new(urls, with_title).run(self).await
    }

    /// Resolve a single normalized URL, cache first.
    pub(crate) async fn lookup(&self, url: String, with_title: bool) -> IconLookupResult {
        if with_title {
            if let Some(hit) = self.cache.read_title(&url).await {
                tracing::debug!("title cache hit for {}", url);
                return IconLookupResult { url, favicon: hit.favicon, title: hit.title };
            }
        } else if let Some(host) = host_of(&url)
            && let Some(favicon) = self.cache.read_favicon(&host).await
        {
            tracing::debug!("favicon cache hit for {}", host);
            return IconLookupResult { url, favicon, title: String::new() };
        }

        let (favicon, title) = self.fetch(&url, with_title).await;
        IconLookupResult { url, favicon, title }
    }

    async fn fetch(&self, url: &str, with_title: bool) -> (String, String) {
        let outcome = match self.finder.fetch_icons_with_title(url).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(url, error = %e, "icon fetch failed");
                return (String::new(), String::new());
            }
        };

        let favicon = outcome.icon.map(|icon| icon.url).unwrap_or_default();

        // The finder reports the title either way; it is cached even when the
        // caller did not ask for it.
        let cache = self.cache.clone();
        let (cache_url, cache_favicon, cache_title) = (url.to_string(), favicon.clone(), outcome.title.clone());
        tokio::spawn(async move {
            cache.write(&cache_url, &cache_favicon, &cache_title).await;
        });

        let title = if with_title { outcome.title } else { String::new() };
        (favicon, title)
    }
}
