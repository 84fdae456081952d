use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chain_data::FetchFailed;
use market_core::CoreError;
use serde_json::json;

/// Unified error type for hub API responses.
#[derive(Debug)]
pub enum HubError {
    /// Every source address failed at the transport level.
    Fetch(FetchFailed),
    BadRequest(String),
}

impl std::fmt::Display for HubError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch(failed) => write!(f, "fetch_failed: {failed}"),
            Self::BadRequest(msg) => write!(f, "bad_request: {msg}"),
        }
    }
}

impl std::error::Error for HubError {}

impl IntoResponse for HubError {
    fn into_response(self) -> Response {
        match self {
            Self::Fetch(failed) => {
                let body = json!({
                    "error": failed.to_string(),
                    "classification": failed.kind.as_str(),
                    "hint": failed.kind.user_hint(),
                });
                (StatusCode::BAD_GATEWAY, axum::Json(body)).into_response()
            }
            Self::BadRequest(msg) => {
                let body = json!({ "error": msg });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
        }
    }
}

impl From<FetchFailed> for HubError {
    fn from(failed: FetchFailed) -> Self {
        Self::Fetch(failed)
    }
}

impl From<CoreError> for HubError {
    fn from(e: CoreError) -> Self {
        Self::BadRequest(e.to_string())
    }
}
