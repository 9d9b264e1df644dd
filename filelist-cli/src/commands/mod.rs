//! Command implementations for filelist CLI

pub mod lists;
pub mod serve;

use std::path::PathBuf;

use clap::Args;

// Re-export main dispatcher functions for flat access from main.rs
pub use lists::run_lists;
pub use serve::run_serve;

/// Database location, shared by every command that opens the store
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// SQLite database file (created if missing)
    #[arg(long, env = "FILES_DB", default_value = "files.db", global = true)]
    pub db_path: PathBuf,
}
