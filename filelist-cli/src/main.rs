//! filelist CLI - named file lists over HTTP
//!
//! Entry point for the `filelist` binary:
//! - `serve`: run the HTTP server
//! - `lists`: create, inspect and edit lists directly in the database file

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "filelist",
    author,
    version,
    about = "Named lists of file records (name + hash) served over HTTP from SQLite"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Manage lists directly in the database file
    Lists(commands::lists::ListsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so clap's env fallbacks can see it
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Lists(args) => commands::run_lists(args).await?,
    }

    Ok(())
}
