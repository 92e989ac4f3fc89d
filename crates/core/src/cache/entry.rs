//! Cache entry shapes and the staleness rule.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Entries older than this are treated as absent.
pub const CACHE_TTL_DAYS: i64 = 30;

fn is_fresh(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(updated_at) < Duration::days(CACHE_TTL_DAYS)
}

/// Best favicon found for a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaviconCacheEntry {
    pub favicon: String,
    pub updated_at: DateTime<Utc>,
}

impl FaviconCacheEntry {
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        is_fresh(self.updated_at, now)
    }
}

/// Result for one exact page URL. An empty `favicon` records a lookup that
/// found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCacheEntry {
    pub favicon: String,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

impl TitleCacheEntry {
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        is_fresh(self.updated_at, now)
    }
}
