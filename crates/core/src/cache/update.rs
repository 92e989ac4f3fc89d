//! Recording fetch outcomes.

use super::connection::CacheDb;
use super::entry::{FaviconCacheEntry, TitleCacheEntry};
use super::key::{host_of, title_key};
use crate::Error;
use chrono::{DateTime, Utc};
use tokio_rusqlite::params;

impl CacheDb {
    /// Record the outcome of a fetch for `url`, logging any failure.
    ///
    /// See [`CacheDb::try_write`] for which namespaces are touched.
    pub async fn write(&self, url: &str, favicon: &str, title: &str) {
        if let Err(e) = self.try_write(url, favicon, title).await {
            tracing::warn!(url, error = %e, "icon cache write failed");
        }
    }

    /// Record the outcome of a fetch for `url`.
    ///
    /// - A non-empty `favicon` is stored under the URL's host.
    /// - A page entry is stored under the URL's digest when `title` is
    ///   non-empty or `favicon` is empty. Favicon-only results skip it so an
    ///   empty title never masks a later title lookup.
    ///
    /// Both upserts run in a single transaction.
    pub async fn try_write(&self, url: &str, favicon: &str, title: &str) -> Result<(), Error> {
        self.try_write_at(url, favicon, title, Utc::now()).await
    }

    /// [`CacheDb::try_write`] stamping entries with an explicit instant.
    pub async fn try_write_at(
        &self, url: &str, favicon: &str, title: &str, updated_at: DateTime<Utc>,
    ) -> Result<(), Error> {
        let mut favicon_row = None;
        if !favicon.is_empty() {
            match host_of(url) {
                Some(host) => {
                    let entry = FaviconCacheEntry { favicon: favicon.to_string(), updated_at };
                    favicon_row = Some((host.into_bytes(), serde_json::to_vec(&entry)?));
                }
                None => tracing::warn!(url, "no host in url, favicon not cached"),
            }
        }

        let mut title_row = None;
        if !title.is_empty() || favicon.is_empty() {
            let entry = TitleCacheEntry { favicon: favicon.to_string(), title: title.to_string(), updated_at };
            title_row = Some((title_key(url).to_vec(), serde_json::to_vec(&entry)?));
        }

        if favicon_row.is_none() && title_row.is_none() {
            return Ok(());
        }

        self.conn
            .call(move |conn| -> Result<(), Error> {
                let tx = conn.transaction()?;
                if let Some((key, value)) = favicon_row {
                    tx.execute(
                        "INSERT INTO favicons (key, value) VALUES (?1, ?2)
                         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                        params![key, value],
                    )?;
                }
                if let Some((key, value)) = title_row {
                    tx.execute(
                        "INSERT INTO titles (key, value) VALUES (?1, ?2)
                         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                        params![key, value],
                    )?;
                }
                tx.commit()?;
                Ok(())
            })
            .await
            .map_err(Error::from)?;

        tracing::debug!(url, favicon, has_title = !title.is_empty(), "icon cache updated");
        Ok(())
    }
}
