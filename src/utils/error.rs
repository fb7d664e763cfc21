use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;
use thiserror::Error;

/// Outcome of a single failed upstream lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("not_found: {0}")]
    NotFound(String),
    #[error("upstream_schema: {0}")]
    Schema(String),
    #[error("upstream_unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("not_found: {0}")]
    NotFound(String),
    #[error("internal: {0}")]
    Internal(String),
}

// Country resolution gates the whole mashup, so every way it can fail is a 404.
impl From<LookupError> for ApiError {
    fn from(e: LookupError) -> Self {
        ApiError::NotFound(e.to_string())
    }
}

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")] pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { error: "Validation failed", details: Some(msg) }),
            ).into_response(),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody { error: "Country not found", details: Some(msg) }),
            ).into_response(),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: "Internal server error", details: Some(msg) }),
            ).into_response(),
        }
    }
}
