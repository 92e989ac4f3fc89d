use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use iconbatch_core::{BatchEngine, CacheDb, Error, FinderOutcome, IconDescriptor, IconFinder, IconFormat};

/// Finder answering from a fixed table: page url -> (icon url, title).
pub struct StubFinder {
    pages: HashMap<String, (String, String)>,
}

impl StubFinder {
    pub fn new(pages: &[(&str, &str, &str)]) -> Self {
        let pages = pages
            .iter()
            .map(|(url, icon, title)| (url.to_string(), (icon.to_string(), title.to_string())))
            .collect();
        Self { pages }
    }
}

#[async_trait]
impl IconFinder for StubFinder {
    async fn fetch_icons_with_title(&self, url: &str) -> Result<FinderOutcome, Error> {
        match self.pages.get(url) {
            Some((icon, title)) => Ok(FinderOutcome {
                title: title.clone(),
                icon: Some(IconDescriptor {
                    url: icon.clone(),
                    width: 32,
                    height: 32,
                    bytes: 1024,
                    format: IconFormat::Ico,
                }),
            }),
            None => Err(Error::HttpError(format!("status 404 from {url}"))),
        }
    }
}

pub async fn engine() -> BatchEngine {
    let cache = CacheDb::open_in_memory().await.unwrap();
    let finder = StubFinder::new(&[
        ("http://example.com", "http://example.com/favicon.ico", "Example Domain"),
        ("https://rust-lang.org", "https://rust-lang.org/favicon.ico", "Rust"),
    ]);
    BatchEngine::new(cache, Arc::new(finder))
}
