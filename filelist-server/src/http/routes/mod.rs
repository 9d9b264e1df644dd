//! Route handlers organized by resource
//!
//! Parameters travel in the query string (`type`, `from`, `to`, `name`,
//! `secret_key`). Handlers check, in order: required parameters, the
//! secret, then the store operation.

pub mod entries;
pub mod health;
pub mod lists;

use crate::http::error::ApiError;
use crate::models::ValidationError;
use crate::state::AppState;

/// Take a query parameter that must be present and non-empty.
pub(crate) fn required(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::Empty { field }.into()),
    }
}

/// Reject the request unless `secret_key` matches the configured secret.
pub(crate) fn authorize(state: &AppState, secret_key: Option<&str>) -> Result<(), ApiError> {
    if state.auth().verify(secret_key) {
        Ok(())
    } else {
        tracing::warn!("rejected request with invalid secret_key");
        Err(ApiError::Forbidden {
            reason: "invalid secret_key",
        })
    }
}
