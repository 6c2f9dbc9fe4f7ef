//! Database connection flags shared by every subcommand

use std::time::Duration;

use clap::Args;
use pharmacy_server::config::{
    DbConfig, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT, DEFAULT_USER,
};

#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database host
    #[arg(long, env = "DB_HOST", default_value = DEFAULT_HOST)]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = DEFAULT_PORT)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = DEFAULT_USER)]
    pub db_user: String,

    /// Database password (no default)
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = DEFAULT_DATABASE)]
    pub db_name: String,

    /// Full connection URL (overrides the discrete flags)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection
    #[arg(long, default_value = "5")]
    pub acquire_timeout: u64,
}

impl From<DbArgs> for DbConfig {
    fn from(args: DbArgs) -> Self {
        DbConfig {
            host: args.db_host,
            port: args.db_port,
            user: args.db_user,
            database: args.db_name,
            max_connections: args.max_connections,
            acquire_timeout: Duration::from_secs(args.acquire_timeout),
            ..DbConfig::default()
        }
        .with_secrets(args.db_password, args.database_url)
    }
}
