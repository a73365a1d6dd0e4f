use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::model_state::ModelState;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(ModelState),

    #[error("Bad Request: {0}")]
    BadRequest(ModelState),

    #[error("Validation error: {0}")]
    ValidationError(ModelState),

    #[error("Conflict: {0}")]
    Conflict(ModelState),

    #[error("Persistence error: {0}")]
    Persistence(ModelState),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Bare 404 with an empty error collection.
    pub fn not_found() -> Self {
        AppError::NotFound(ModelState::new())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let errors = match self {
            AppError::NotFound(state)
            | AppError::BadRequest(state)
            | AppError::ValidationError(state)
            | AppError::Conflict(state)
            | AppError::Persistence(state) => state,
            AppError::Database(msg) => ModelState::with_error("", msg),
        };

        let message = errors
            .first_message()
            .map(str::to_string)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Error").to_string());

        tracing::error!("Error: {}: {}", status, message);

        let body = Json(json!({
            "error": message,
            "errors": errors,
        }));

        (status, body).into_response()
    }
}
