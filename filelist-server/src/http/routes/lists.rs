//! List lifecycle endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{authorize, required};
use crate::db::repos::ListRepo;
use crate::http::error::ApiError;
use crate::http::extractors::QueryParams;
use crate::state::AppState;

/// Query parameters naming one list
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(rename = "type")]
    pub list: Option<String>,
    pub secret_key: Option<String>,
}

/// List lifecycle response
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub status: &'static str,
    pub list: String,
}

/// POST /verify/create_list?type=..&secret_key=..
async fn create_list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<(StatusCode, Json<ListResponse>), ApiError> {
    let list = required(params.list, "type")?;
    authorize(&state, params.secret_key.as_deref())?;

    let name = ListRepo::new(state.store()).create(&list).await?;

    Ok((
        StatusCode::CREATED,
        Json(ListResponse {
            status: "created",
            list: name.as_str().to_owned(),
        }),
    ))
}

/// POST|DELETE /verify/remove_list?type=..&secret_key=..
async fn delete_list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<Json<ListResponse>, ApiError> {
    let list = required(params.list, "type")?;
    authorize(&state, params.secret_key.as_deref())?;

    ListRepo::new(state.store()).delete(&list).await?;

    Ok(Json(ListResponse {
        status: "deleted",
        list,
    }))
}

/// List lifecycle routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/verify/create_list", post(create_list))
        .route("/verify/remove_list", post(delete_list).delete(delete_list))
}
