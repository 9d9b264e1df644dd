//! filelist-server: named file lists over HTTP
//!
//! Each list is one SQLite table of `(name, hash)` entries. Lists are
//! created, enumerated, edited and deleted through query-string routes;
//! mutating routes require a shared secret.

pub mod auth;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use auth::AuthContext;
pub use db::{DbError, EntryRepo, ListRepo, Store};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use models::{FileEntry, ListName, ValidationError};
pub use state::AppState;
