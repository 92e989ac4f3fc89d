//! The icon discovery seam.
//!
//! The batch engine only knows this trait; network access and candidate
//! ranking live in the adapters that implement it.

use async_trait::async_trait;

use crate::{Error, IconDescriptor};

/// What a finder learned about one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinderOutcome {
    /// Page title, empty when the page has none.
    pub title: String,
    /// The best candidate icon, if any was found.
    pub icon: Option<IconDescriptor>,
}

/// Discovers the best icon and the title of a page.
#[async_trait]
pub trait IconFinder: Send + Sync {
    /// Fetch the best icon and the page title for `url`.
    ///
    /// `url` is already normalized (scheme-qualified, trimmed).
    async fn fetch_icons_with_title(&self, url: &str) -> Result<FinderOutcome, Error>;
}
