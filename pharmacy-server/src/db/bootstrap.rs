//! Startup bootstrap: reset, build and seed on a single connection
//!
//! Destructive: every table is dropped and recreated. Callers decide whether
//! to run it at all (the CLI gates it behind `--seed`).

use std::fmt;

use sqlx::PgPool;

use super::{schema, seed, DbError, SeedReport};

/// Step of the bootstrap sequence that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    Connect,
    Build,
}

impl fmt::Display for BootstrapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => f.write_str("connect"),
            Self::Build => f.write_str("create tables"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("bootstrap failed during {step}: {source}")]
pub struct BootstrapError {
    pub step: BootstrapStep,
    #[source]
    pub source: DbError,
}

/// Drop, create and seed all tables.
///
/// A failed drop is logged and the sequence continues; a failed create
/// stops it before seeding. Seed failures are reported per table in the
/// returned [`SeedReport`]. The connection goes back to the pool on every
/// path when it is dropped.
pub async fn run(pool: &PgPool) -> Result<SeedReport, BootstrapError> {
    let mut conn = pool.acquire().await.map_err(|e| BootstrapError {
        step: BootstrapStep::Connect,
        source: e.into(),
    })?;
    tracing::info!("Connected to database for bootstrap");

    if let Err(e) = schema::reset(&mut conn).await {
        tracing::error!(error = %e, "Error dropping tables");
    }

    schema::build(&mut conn).await.map_err(|source| BootstrapError {
        step: BootstrapStep::Build,
        source,
    })?;

    let report = seed::load(&mut conn).await;
    if report.is_success() {
        tracing::info!(rows = report.inserted(), "Seed data inserted");
    } else {
        tracing::warn!(
            failed = report.failures().count(),
            "Seed data partially inserted"
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_names_the_step() {
        let err = BootstrapError {
            step: BootstrapStep::Build,
            source: DbError::from(sqlx::Error::RowNotFound),
        };
        assert!(err.to_string().starts_with("bootstrap failed during create tables"));
    }
}
