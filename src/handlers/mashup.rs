use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::config::AppState;
use crate::models::mashup::MashupBody;
use crate::services::mashup_service::build_mashup;
use crate::utils::error::ApiError;

pub async fn get_mashup(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("country name must not be empty".into()));
    }

    let result = build_mashup(&state, name).await.map_err(|e| {
        info!(query = name, error = %e, "country could not be resolved");
        ApiError::from(e)
    })?;

    let body = serde_json::to_value(MashupBody::from(&result))
        .map_err(|e| ApiError::Internal(format!("could not serialize mashup: {}", e)))?;
    Ok((StatusCode::OK, Json(body)))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "ok": true })))
}
