//! Core types and shared functionality for iconbatch.
//!
//! This crate provides:
//! - Icon cache with SQLite backend
//! - Batch job engine fanning lookups out to a bounded worker pool
//! - The `IconFinder` seam implemented by fetch adapters
//! - Unified error types
//! - Configuration structures

pub mod batch;
pub mod cache;
pub mod config;
pub mod error;
pub mod finder;
pub mod icon;

pub use batch::{BatchEngine, BatchJob, IconLookupResult};
pub use cache::{CacheDb, FaviconCacheEntry, TitleCacheEntry, TitleHit};
pub use config::AppConfig;
pub use error::Error;
pub use finder::{FinderOutcome, IconFinder};
pub use icon::{IconDescriptor, IconFormat};
