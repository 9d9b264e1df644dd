//! HTTP server command
//!
//! Runs the filelist HTTP server over a SQLite database file.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use filelist_server::{run_server, AuthContext, ServerConfig, Store};

use super::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Shared secret required by mutating routes (`secret_key` query parameter)
    #[arg(long, env = "SECRET_KEY", hide_env_values = true)]
    pub secret_key: String,

    /// Request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.bind, self.port),
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    let auth = AuthContext::new(args.secret_key).context("SECRET_KEY must not be empty")?;

    tracing::info!(
        db = %args.db.db_path.display(),
        "Starting filelist server on {}",
        config.bind_addr
    );

    let store = Store::open(&args.db.db_path)
        .await
        .with_context(|| format!("Failed to open database {}", args.db.db_path.display()))?;

    // Run server (blocks until shutdown)
    run_server(store, auth, config).await.context("Server error")?;

    Ok(())
}
