//! Request-level errors.
//!
//! Lookup outcomes never become errors; only a body that cannot be read as
//! a lookup request does.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The body is not a JSON object with an optional string `user_query`.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidBody(err) => {
                tracing::debug!(error = %err, "rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    format!("Please pass a JSON body like {{\"user_query\": \"...\"}}: {err}"),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{not json").unwrap_err()
    }

    #[test]
    fn invalid_body_display() {
        let err = ApiError::from(json_error());
        assert!(err.to_string().starts_with("invalid request body: "));
    }

    #[test]
    fn invalid_body_is_bad_request() {
        let response = ApiError::from(json_error()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
