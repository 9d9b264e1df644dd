//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Takes raw list identifiers and validates them before any store access
//! - Treats table existence as list existence
//! - Uses transactions for multi-step operations

pub mod entries;
pub mod lists;

pub use entries::EntryRepo;
pub use lists::ListRepo;

use crate::models::{ListName, ValidationError};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("invalid list identifier: {0}")]
    InvalidIdentifier(ValidationError),

    #[error("invalid entry: {0}")]
    InvalidPayload(ValidationError),

    #[error("list '{list}' already exists")]
    AlreadyExists { list: String },

    #[error("list '{list}' not found")]
    NotFound { list: String },

    #[error("source list '{list}' not found")]
    SourceListNotFound { list: String },

    #[error("destination list '{list}' not found")]
    DestListNotFound { list: String },

    #[error("entry '{name}' not found in list '{list}'")]
    EntryNotFound { list: String, name: String },
}

/// Validate a raw identifier. No store access happens before this succeeds.
pub(crate) fn parse_list_name(id: &str) -> Result<ListName, DbError> {
    ListName::new(id).map_err(DbError::InvalidIdentifier)
}

/// Column layout of every list table.
pub(crate) const ENTRY_COLUMNS: &str = "id INTEGER PRIMARY KEY AUTOINCREMENT, \
     name TEXT NOT NULL CHECK (length(name) > 0), \
     hash TEXT NOT NULL CHECK (length(hash) > 0)";
