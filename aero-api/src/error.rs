use aero_domain::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Conflict(String),
    /// A store failure the caller only gets a generic message for; the
    /// underlying cause is logged server-side when the response renders.
    Internal {
        message: &'static str,
        cause: StoreError,
    },
}

impl AppError {
    /// Classifies a store error, attaching the operation-specific generic
    /// message used for anything that maps to a 500.
    pub fn from_store(message: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound("Booking not found".to_string()),
            StoreError::PassengerMismatch { .. } => AppError::Conflict(err.to_string()),
            cause => AppError::Internal { message, cause },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal { message, cause } => {
                tracing::error!("{}: {}", message, cause);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
