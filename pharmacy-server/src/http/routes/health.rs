//! Liveness plus a quick database reachability check
//!
//! Always answers 200; `database` says whether a pooled connection could
//! run `SELECT 1` within [`DB_PROBE_TIMEOUT`].

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;

use crate::http::server::AppState;

pub const DB_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Ok,
    Unavailable,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseStatus,
}

async fn database_status(pool: &PgPool, limit: Duration) -> DatabaseStatus {
    let probe = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool);
    match tokio::time::timeout(limit, probe).await {
        Ok(Ok(_)) => DatabaseStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "health: database query failed");
            DatabaseStatus::Unavailable
        }
        Err(_) => {
            tracing::warn!(timeout = ?limit, "health: database check timed out");
            DatabaseStatus::Unavailable
        }
    }
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database: database_status(&state.pool, DB_PROBE_TIMEOUT).await,
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
