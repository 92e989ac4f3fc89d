//! Exact-URL → title + favicon lookups.

use super::connection::CacheDb;
use super::entry::TitleCacheEntry;
use super::key::title_key;
use crate::Error;
use chrono::{DateTime, Utc};
use tokio_rusqlite::{params, rusqlite};

/// A valid title cache hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleHit {
    pub title: String,
    pub favicon: String,
}

impl CacheDb {
    /// Get the stored title entry for `url`, fresh or not.
    pub async fn get_title_entry(&self, url: &str) -> Result<Option<TitleCacheEntry>, Error> {
        let key = title_key(url).to_vec();
        let value = self
            .conn
            .call(move |conn| -> Result<Option<Vec<u8>>, Error> {
                let result = conn.query_row("SELECT value FROM titles WHERE key = ?1", params![key], |row| {
                    row.get::<_, Vec<u8>>(0)
                });

                match result {
                    Ok(value) => Ok(Some(value)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            })
            .await
            .map_err(Error::from)?;

        match value {
            Some(bytes) if !bytes.is_empty() => Ok(Some(serde_json::from_slice(&bytes)?)),
            _ => Ok(None),
        }
    }

    /// Cached title and favicon for exactly `url`, or None on a miss.
    ///
    /// A hit may carry empty fields: that records an earlier lookup which
    /// found nothing.
    pub async fn read_title(&self, url: &str) -> Option<TitleHit> {
        self.read_title_at(url, Utc::now()).await
    }

    /// [`CacheDb::read_title`] evaluated at an explicit instant.
    pub async fn read_title_at(&self, url: &str, now: DateTime<Utc>) -> Option<TitleHit> {
        match self.get_title_entry(url).await {
            Ok(Some(entry)) if entry.is_fresh_at(now) => Some(TitleHit { title: entry.title, favicon: entry.favicon }),
            Ok(Some(entry)) => {
                tracing::debug!(url, updated_at = %entry.updated_at, "stale title entry");
                None
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(url, error = %e, "title cache read failed");
                None
            }
        }
    }
}
