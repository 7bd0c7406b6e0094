//! Handlers for the exchange-rate update and history.

use axum::extract::{Path, State};
use axum::Json;
use obra_core::error::CoreError;
use obra_core::money::validate_positive;
use obra_core::types::DbId;
use obra_db::models::exchange_rate::{ExchangeRateHistoryEntry, UpdateExchangeRate};
use obra_db::models::project::Project;
use obra_db::repositories::{ExchangeRateRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// PUT /api/v1/projects/{id}/exchange-rate
///
/// Overwrites the project's current rate and appends a history entry in
/// one transaction; returns the updated project.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExchangeRate>,
) -> AppResult<Json<Project>> {
    validate_positive(input.usd_to_crc_rate, "usd_to_crc_rate")?;

    let project = ProjectRepo::update_exchange_rate(&state.pool, id, input.usd_to_crc_rate)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}/exchange-rate-history
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ExchangeRateHistoryEntry>>> {
    let history = ExchangeRateRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(history))
}
