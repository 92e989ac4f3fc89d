//! Boundary errors for the iconbatch server.
//!
//! Both surfaces report failures the same way: HTTP callers get a
//! `400 text/plain` body, MCP callers a JSON-RPC error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use iconbatch_core::Error;
use rmcp::model::{ErrorCode, ErrorData as McpError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed request payload.
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Engine(#[from] Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "rejecting request");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl From<ApiError> for McpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput(msg) => McpError { code: ErrorCode(-32602), message: msg.into(), data: None },
            ApiError::Engine(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_invalid_params() {
        let err: McpError = ApiError::InvalidInput("bad body".into()).into();
        assert_eq!(err.code, ErrorCode(-32602));
        assert_eq!(err.message, "bad body");
    }

    #[test]
    fn test_engine_error_uses_core_mapping() {
        let err: McpError = ApiError::from(Error::BatchIncomplete { expected: 3, received: 1 }).into();
        assert_eq!(err.code, ErrorCode(-32013));
    }

    #[test]
    fn test_response_is_bad_request() {
        let response = ApiError::InvalidInput("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
    }
}
