//! Client code for iconbatch.
//!
//! This crate provides the HTTP fetch client, the icon ranking rules and the
//! remote [`iconbatch_core::IconFinder`] adapter used by the server.

pub mod fetch;
pub mod finder;
pub mod ranking;

pub use fetch::{FetchClient, FetchConfig, FetchResponse};
pub use finder::RemoteIconFinder;
pub use ranking::{best_icon, sort_icons, sort_icons_by_custom};
