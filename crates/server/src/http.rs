//! HTTP surface of the icon service.
//!
//! - `GET /icon?url=<u>&with_title=true` looks up one URL
//! - `POST /icons?with_title=true` looks up a JSON array of URLs
//! - `GET /health` answers `ok`
//!
//! Batch responses are in completion order.

use std::net::SocketAddr;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    routing::{get, post},
};
use iconbatch_core::{BatchEngine, IconLookupResult};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub engine: BatchEngine,
}

#[derive(Debug, Deserialize)]
pub struct IconQuery {
    url: String,
    #[serde(default)]
    with_title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchQuery {
    #[serde(default)]
    with_title: Option<String>,
}

/// Only the literal `true` turns titles on.
fn title_requested(value: Option<&str>) -> bool {
    value == Some("true")
}

pub fn router(engine: BatchEngine) -> Router {
    Router::new()
        .route("/icon", get(icon))
        .route("/icons", post(icons))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { engine })
}

pub async fn serve(addr: SocketAddr, router: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown requested");
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn icon(State(state): State<AppState>, Query(query): Query<IconQuery>) -> Result<Json<IconLookupResult>, ApiError> {
    if query.url.trim().is_empty() {
        return Err(ApiError::InvalidInput("url cannot be empty".into()));
    }

    let with_title = title_requested(query.with_title.as_deref());
    let results = state.engine.process(vec![query.url], with_title).await?;

    results
        .into_iter()
        .next()
        .map(Json)
        .ok_or_else(|| ApiError::InvalidInput("lookup produced no result".into()))
}

async fn icons(
    State(state): State<AppState>, Query(query): Query<BatchQuery>, body: Bytes,
) -> Result<Json<Vec<IconLookupResult>>, ApiError> {
    let urls: Vec<String> =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidInput(format!("expected a JSON array of URLs: {e}")))?;

    let with_title = title_requested(query.with_title.as_deref());
    let results = state.engine.process(urls, with_title).await?;

    Ok(Json(results))
}
