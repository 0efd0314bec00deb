//! Route definitions and handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use bizdata_scrape::Reply;

use crate::error::ApiError;
use crate::state::AppState;

/// Route the lookup was originally published under.
pub const FUNCTION_ROUTE: &str = "/api/BizportalMarketData";
pub const MARKET_DATA_ROUTE: &str = "/api/market-data";

/// Response header carrying the reply kind (`prompt`, `no_match`, ...).
pub const REPLY_KIND_HEADER: &str = "x-bizdata-reply";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(FUNCTION_ROUTE, post(market_data))
        .route(MARKET_DATA_ROUTE, post(market_data))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Lookup request body.  A missing or `null` query is treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct MarketDataRequest {
    #[serde(default)]
    pub user_query: Option<String>,
}

/// The body is read raw so any content type carrying JSON is accepted.
async fn market_data(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request: MarketDataRequest = serde_json::from_slice(&body)?;
    let reply = state.service.answer(request.user_query.as_deref()).await;
    tracing::info!(
        kind = %reply.kind,
        chars = reply.text.chars().count(),
        "market data reply"
    );
    Ok(reply_response(reply))
}

fn reply_response(reply: Reply) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (HeaderName::from_static(REPLY_KIND_HEADER), reply.kind.as_str()),
        ],
        reply.text,
    )
        .into_response()
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Liveness probe; does not touch the quote site.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "bizdata",
        version: env!("CARGO_PKG_VERSION"),
    })
}
