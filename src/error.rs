use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{} not found", entity) })),
            )
                .into_response(),
            ApiError::Validation(reasons) => {
                // The violated rules stay in the log; the wire payload is generic.
                tracing::debug!(?reasons, "request rejected by validation");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "errors": ["validation errors"] })),
                )
                    .into_response()
            }
            ApiError::Database(e) => {
                tracing::error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
