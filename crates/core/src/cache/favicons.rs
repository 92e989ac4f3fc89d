//! Host → favicon lookups.

use super::connection::CacheDb;
use super::entry::FaviconCacheEntry;
use crate::Error;
use chrono::{DateTime, Utc};
use tokio_rusqlite::{params, rusqlite};

impl CacheDb {
    /// Get the stored favicon entry for a host, fresh or not.
    ///
    /// Returns None if the host has no entry.
    pub async fn get_favicon_entry(&self, host: &str) -> Result<Option<FaviconCacheEntry>, Error> {
        let key = host.as_bytes().to_vec();
        let value = self
            .conn
            .call(move |conn| -> Result<Option<Vec<u8>>, Error> {
                let result = conn.query_row("SELECT value FROM favicons WHERE key = ?1", params![key], |row| {
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

    /// Cached favicon for `host`, or None on a miss.
    ///
    /// Absent, stale and unreadable entries are all misses.
    pub async fn read_favicon(&self, host: &str) -> Option<String> {
        self.read_favicon_at(host, Utc::now()).await
    }

    /// [`CacheDb::read_favicon`] evaluated at an explicit instant.
    pub async fn read_favicon_at(&self, host: &str, now: DateTime<Utc>) -> Option<String> {
        match self.get_favicon_entry(host).await {
            Ok(Some(entry)) if entry.is_fresh_at(now) => Some(entry.favicon),
            Ok(Some(entry)) => {
                tracing::debug!(host, updated_at = %entry.updated_at, "stale favicon entry");
                None
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(host, error = %e, "favicon cache read failed");
                None
            }
        }
    }
}
