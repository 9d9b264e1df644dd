//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing parameter, bad identifier or bad entry (400)
    Validation(ValidationError),

    /// Request body is not a JSON entry (400)
    MalformedBody { message: String },

    /// Secret missing or wrong (403)
    Forbidden { reason: &'static str },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Resource already exists (409)
    Conflict { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => json!({
                "error": "validation_error",
                "message": e.to_string()
            }),
            Self::MalformedBody { message } => json!({
                "error": "validation_error",
                "message": format!("invalid request body: {}", message)
            }),
            Self::Forbidden { reason } => json!({
                "error": "forbidden",
                "message": reason
            }),
            Self::NotFound { resource, id } => json!({
                "error": "not_found",
                "message": format!("{} '{}' not found", resource, id)
            }),
            Self::Conflict { resource, id } => json!({
                "error": "conflict",
                "message": format!("{} '{}' already exists", resource, id)
            }),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "database error");
                json!({
                    "error": "internal_error",
                    "message": "an internal error occurred"
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::InvalidIdentifier(v) | DbError::InvalidPayload(v) => Self::Validation(v),
            DbError::AlreadyExists { list } => Self::Conflict {
                resource: "list",
                id: list,
            },
            DbError::NotFound { list } => Self::NotFound {
                resource: "list",
                id: list,
            },
            DbError::SourceListNotFound { list } => Self::NotFound {
                resource: "source list",
                id: list,
            },
            DbError::DestListNotFound { list } => Self::NotFound {
                resource: "destination list",
                id: list,
            },
            DbError::EntryNotFound { list, name } => Self::NotFound {
                resource: "entry",
                id: format!("{}/{}", list, name),
            },
            DbError::Sqlx(_) => Self::Database(e),
        }
    }
}
