//! icon_batch tool implementation.
//!
//! Looks up many pages at once on the engine's bounded worker pool.
//! Results come back in completion order.

use iconbatch_core::BatchEngine;
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::json_result;

/// Input parameters for icon_batch tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct IconBatchParams {
    /// Page URLs. Missing schemes default to `http://`.
    pub urls: Vec<String>,

    /// Also return page titles (default: false).
    #[serde(default)]
    pub with_title: bool,
}

/// Implementation of the icon_batch tool.
pub async fn batch_impl(engine: &BatchEngine, params: IconBatchParams) -> Result<CallToolResult, McpError> {
    let count = params.urls.len();
    let results = engine.process(params.urls, params.with_title).await?;

    tracing::debug!(count, "icon batch finished");

    json_result(&results)
}
