/// Health check API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub users: i64,
}

/// GET /api/health - Health check endpoint
///
/// Touches the store so a broken database connection surfaces as a 500.
pub async fn health(State(app_state): State<AppState>) -> Result<Json<HealthResponse>> {
    let users = app_state.users.count().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        users,
    }))
}
