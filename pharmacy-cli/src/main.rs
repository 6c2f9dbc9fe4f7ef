//! pharmacy CLI - pharmacy inventory demo server
//!
//! - `pharmacy serve`: reset and seed the database (unless `--seed false`),
//!   then serve the landing page and `/stocked-drugs`
//! - `pharmacy seed`: reset and seed only, printing a per-table report

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "pharmacy",
    author,
    version,
    about = "Pharmacy inventory demo: schema bootstrap, seed data and a stocked drugs API"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (resets and seeds the database first by default)
    Serve(commands::serve::ServeArgs),
    /// Drop, recreate and seed all tables, then exit
    Seed(commands::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so clap's `env` fallbacks can see it
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match dotenv {
        Ok(path) => tracing::debug!("Loaded .env from {}", path.display()),
        Err(_) => tracing::debug!("No .env file found, using environment only"),
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Seed(args) => commands::run_seed(args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_seeds_by_default() {
        let cli = Cli::try_parse_from(["pharmacy", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert!(args.seed);
                assert_eq!(args.bind.port(), 5000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn seed_can_be_disabled() {
        let cli = Cli::try_parse_from(["pharmacy", "serve", "--seed", "false"]).unwrap();
        match cli.command {
            Commands::Serve(args) => assert!(!args.seed),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["pharmacy"]).is_err());
    }
}
