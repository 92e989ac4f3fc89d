//! MCP tool implementations.
//!
//! This module contains all tools exposed by the iconbatch server.

pub mod icon_batch;
pub mod icon_lookup;

pub use icon_batch::{IconBatchParams, batch_impl};
pub use icon_lookup::{IconLookupParams, lookup_impl};

use iconbatch_core::Error;
use rmcp::{ErrorData as McpError, model::*};
use serde::Serialize;

/// Wrap `output` as pretty JSON text content.
pub(crate) fn json_result<T: Serialize>(output: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(output).map_err(Error::from)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
