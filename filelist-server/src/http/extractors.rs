//! Custom Axum extractors

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::models::ValidationError;

/// Query-string parameters with JSON error responses.
///
/// A key given more than once keeps its first value.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> =
            Query::from_request_parts(parts, state)
                .await
                .map_err(|_| malformed_query())?;

        let mut fields = Map::new();
        for (key, value) in pairs {
            fields.entry(key).or_insert(Value::String(value));
        }

        let params = serde_json::from_value(Value::Object(fields)).map_err(|_| malformed_query())?;
        Ok(Self(params))
    }
}

fn malformed_query() -> ApiError {
    ApiError::Validation(ValidationError::InvalidFormat {
        field: "query string",
        reason: "malformed query parameters",
    })
}
