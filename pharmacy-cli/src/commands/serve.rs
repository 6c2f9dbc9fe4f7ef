//! HTTP server command
//!
//! Bootstraps the database (destructive, on by default) and serves until
//! shutdown.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use pharmacy_server::config::DbConfig;
use pharmacy_server::db::{bootstrap, create_lazy_pool};
use pharmacy_server::http::{run_server, ServerConfig};

use super::db_args::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Drop, recreate and seed all tables before serving
    #[arg(long, env = "PHARMACY_SEED", default_value_t = true, action = ArgAction::Set)]
    pub seed: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from(args.db);
    tracing::debug!(config = ?db_config, "database configuration");

    // Lazy: the server comes up even if the database is down
    let pool = create_lazy_pool(&db_config).context("Invalid database configuration")?;

    if args.seed {
        tracing::warn!("Resetting database: all pharmacy tables will be dropped and reseeded");
        match bootstrap::run(&pool).await {
            Ok(report) => {
                for outcome in report.failures() {
                    if let Err(e) = &outcome.result {
                        tracing::error!(table = %outcome.table, error = %e, "table not seeded");
                    }
                }
            }
            Err(e) => tracing::error!(error = %e, "Database bootstrap failed, serving anyway"),
        }
    } else {
        tracing::info!("Skipping database reset (--seed false)");
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.timeout),
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
