//! Stocked drugs endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::MedicineRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Medicine;

/// GET /stocked-drugs - every Medicine row as a JSON array
async fn stocked_drugs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Medicine>>, ApiError> {
    let drugs = MedicineRepo::new(&state.pool).list().await?;
    tracing::debug!(count = drugs.len(), "listed stocked drugs");
    Ok(Json(drugs))
}

/// Drug routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stocked-drugs", get(stocked_drugs))
}
