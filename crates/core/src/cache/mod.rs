//! SQLite-backed icon cache.
//!
//! Two independent namespaces share one database handle:
//!
//! - `favicons`: hostname → best favicon for that host
//! - `titles`: MD5 of an exact URL → title and favicon of that page
//!
//! Values are JSON blobs stamped with `updated_at`. Entries older than
//! [`entry::CACHE_TTL_DAYS`] read as misses but are never deleted; the next
//! successful fetch for the key overwrites them.

pub mod connection;
pub mod entry;
pub mod favicons;
pub mod key;
pub mod migrations;
pub mod titles;
pub mod update;

pub use crate::Error;

pub use connection::CacheDb;
pub use entry::{CACHE_TTL_DAYS, FaviconCacheEntry, TitleCacheEntry};
pub use key::{host_of, title_key};
pub use titles::TitleHit;
