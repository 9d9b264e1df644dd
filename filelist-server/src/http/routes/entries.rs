//! Entry endpoints - list, add, remove, move

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{authorize, required};
use super::lists::ListParams;
use crate::db::repos::{DbError, EntryRepo, ListRepo};
use crate::http::error::ApiError;
use crate::http::extractors::QueryParams;
use crate::models::FileEntry;
use crate::state::AppState;

/// Query parameters for removing entries by name
#[derive(Debug, Deserialize)]
pub struct RemoveParams {
    #[serde(rename = "type")]
    pub list: Option<String>,
    pub name: Option<String>,
    pub secret_key: Option<String>,
}

/// Query parameters for moving an entry between lists
#[derive(Debug, Deserialize)]
pub struct MoveParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub name: Option<String>,
    pub secret_key: Option<String>,
}

/// Entry added response
#[derive(Debug, Serialize)]
pub struct AddedResponse {
    pub status: &'static str,
    pub list: String,
    pub entry: FileEntry,
}

/// Entries removed response
#[derive(Debug, Serialize)]
pub struct RemovedResponse {
    pub status: &'static str,
    pub list: String,
    pub name: String,
    pub removed: u64,
}

/// Entry moved response
#[derive(Debug, Serialize)]
pub struct MovedResponse {
    pub status: &'static str,
    pub from: String,
    pub to: String,
    pub entry: FileEntry,
}

/// GET /verify/list?type=.. - no secret needed
async fn list_entries(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<Json<Vec<FileEntry>>, ApiError> {
    let list = required(params.list, "type")?;
    let entries = EntryRepo::new(state.store()).list(&list).await?;
    Ok(Json(entries))
}

/// POST /verify/add?type=..&secret_key=.. with `{"name": .., "hash": ..}`
///
/// The body is decoded after the secret and list checks, so unauthenticated
/// callers get 403 and a missing list is 404 whatever the body holds.
async fn add_entry(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
    body: Bytes,
) -> Result<(StatusCode, Json<AddedResponse>), ApiError> {
    let list = required(params.list, "type")?;
    authorize(&state, params.secret_key.as_deref())?;

    if !ListRepo::new(state.store()).exists(&list).await? {
        return Err(DbError::NotFound { list }.into());
    }

    let entry: FileEntry = serde_json::from_slice(&body).map_err(|e| ApiError::MalformedBody {
        message: e.to_string(),
    })?;

    EntryRepo::new(state.store()).add(&list, &entry).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddedResponse {
            status: "added",
            list,
            entry,
        }),
    ))
}

/// POST|DELETE /verify/remove?type=..&name=..&secret_key=..
async fn remove_entry(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<RemoveParams>,
) -> Result<Json<RemovedResponse>, ApiError> {
    let list = required(params.list, "type")?;
    let name = required(params.name, "name")?;
    authorize(&state, params.secret_key.as_deref())?;

    let removed = EntryRepo::new(state.store()).remove(&list, &name).await?;

    Ok(Json(RemovedResponse {
        status: "removed",
        list,
        name,
        removed,
    }))
}

/// POST /verify/move?from=..&to=..&name=..&secret_key=..
async fn move_entry(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<MoveParams>,
) -> Result<Json<MovedResponse>, ApiError> {
    let from = required(params.from, "from")?;
    let to = required(params.to, "to")?;
    let name = required(params.name, "name")?;
    authorize(&state, params.secret_key.as_deref())?;

    let entry = EntryRepo::new(state.store())
        .move_entry(&from, &to, &name)
        .await?;

    Ok(Json(MovedResponse {
        status: "moved",
        from,
        to,
        entry,
    }))
}

/// Entry routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/verify/list", get(list_entries))
        .route("/verify/add", post(add_entry))
        .route("/verify/remove", post(remove_entry).delete(remove_entry))
        .route("/verify/move", post(move_entry))
}
