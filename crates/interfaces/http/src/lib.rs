//! HTTP endpoint for security lookups.
//!
//! ## Routes
//!
//! - `POST /api/BizportalMarketData` - lookup, body `{"user_query": "..."}`
//! - `POST /api/market-data` - same handler
//! - `GET /health` - health check (JSON)
//!
//! Lookups always answer `200 text/plain`; the `x-bizdata-reply` header
//! names which branch produced the text.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
