//! icon_lookup tool implementation.
//!
//! Resolves the best icon (and optionally the title) of one page.

use iconbatch_core::{BatchEngine, Error};
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::json_result;

/// Input parameters for icon_lookup tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct IconLookupParams {
    /// Page URL. A missing scheme defaults to `http://`.
    pub url: String,

    /// Also return the page title (default: false).
    #[serde(default)]
    pub with_title: bool,
}

/// Implementation of the icon_lookup tool.
pub async fn lookup_impl(engine: &BatchEngine, params: IconLookupParams) -> Result<CallToolResult, McpError> {
    if params.url.trim().is_empty() {
        return Err(Error::InvalidInput("url cannot be empty".into()).into());
    }

    let result = engine
        .process(vec![params.url], params.with_title)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| Error::BatchIncomplete { expected: 1, received: 0 })?;

    json_result(&result)
}
