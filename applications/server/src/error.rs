/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{RosterError, ValidationError};
use serde_json::{json, Map, Value};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found")]
    NotFound,

    #[error(transparent)]
    Validation(ValidationError),

    #[error("Email already in use: {0}")]
    DuplicateEmail(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<RosterError> for ServerError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::Validation(e) => ServerError::Validation(e),
            RosterError::DuplicateEmail(email) => ServerError::DuplicateEmail(email),
            RosterError::Database(msg) | RosterError::Migration(msg) => ServerError::Database(msg),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // Lookups that miss answer with a bare status
            ServerError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            ServerError::Validation(ref e) => {
                let fields: Map<String, Value> = e
                    .errors()
                    .iter()
                    .map(|f| (f.field.to_string(), Value::String(f.message.clone())))
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "Validation failed", "fields": fields }),
                )
            }
            ServerError::DuplicateEmail(_) => (
                StatusCode::CONFLICT,
                json!({ "error": "Email already in use" }),
            ),
            ServerError::Database(ref msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Database error" }),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Configuration error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
