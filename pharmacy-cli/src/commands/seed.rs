//! Seed command: bootstrap the database and print what happened

use anyhow::{bail, Context, Result};
use clap::Parser;

use pharmacy_server::config::DbConfig;
use pharmacy_server::db::{bootstrap, create_pool, TableRepo};

use super::db_args::DbArgs;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let db_config = DbConfig::from(args.db);
    let pool = create_pool(&db_config)
        .await
        .context("Failed to connect to database")?;

    let report = bootstrap::run(&pool).await.context("Database bootstrap failed")?;

    for outcome in report.failures() {
        if let Err(e) = &outcome.result {
            println!("{:<15} FAILED: {}", outcome.table.name(), e);
        }
    }

    if !report.is_success() {
        pool.close().await;
        bail!("{} table(s) failed to seed", report.failures().count());
    }

    let counts = TableRepo::new(&pool)
        .counts()
        .await
        .context("Failed to count rows")?;
    for (table, count) in counts {
        println!("{:<15} {} rows", table.name(), count);
    }

    pool.close().await;
    Ok(())
}
