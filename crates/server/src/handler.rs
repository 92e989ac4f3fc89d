//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::{IconBatchParams, IconLookupParams, batch_impl, lookup_impl};

use iconbatch_core::BatchEngine;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The MCP server handler for iconbatch.
#[derive(Clone)]
pub struct IconServer {
    engine: BatchEngine,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl IconServer {
    pub fn new(engine: BatchEngine) -> Self {
        Self { engine, tool_router: Self::tool_router() }
    }

    /// Look up one page, cache first.
    #[tool(description = "Find the best icon for a page URL. Returns JSON {url, favicon, title}; title is filled only when with_title is true.")]
    async fn icon_lookup(&self, params: Parameters<IconLookupParams>) -> Result<CallToolResult, McpError> {
        lookup_impl(&self.engine, params.0).await
    }

    /// Look up many pages at once.
    #[tool(description = "Find the best icons for many page URLs. Returns a JSON array of {url, favicon, title} in completion order.")]
    async fn icon_batch(&self, params: Parameters<IconBatchParams>) -> Result<CallToolResult, McpError> {
        batch_impl(&self.engine, params.0).await
    }
}

impl ServerHandler for IconServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "iconbatch".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
