//! Handler for the computed budget-health dashboard.

use axum::extract::{Path, State};
use axum::Json;
use obra_core::budget::{analyze, ActivityFigures, BudgetAnalysis};
use obra_core::error::CoreError;
use obra_core::status::ActivityStatus;
use obra_core::types::DbId;
use obra_db::repositories::{ActivityRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/projects/{id}/budget-analysis
///
/// Loads the project and its activities, then delegates to the pure
/// calculator in `obra_core`.
pub async fn get_by_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BudgetAnalysis>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let activities = ActivityRepo::list_by_project(&state.pool, id).await?;

    let figures = activities
        .iter()
        .map(|a| {
            // A status id outside the lookup table here means corrupt data,
            // not bad input: surface it as an internal error.
            let status = ActivityStatus::from_id(a.status_id).map_err(|_| {
                CoreError::Internal(format!(
                    "activity {} has unknown status id {}",
                    a.id, a.status_id
                ))
            })?;
            Ok(ActivityFigures {
                planned_budget_usd: a.planned_budget_usd,
                actual_cost_crc: a.actual_cost_crc,
                status,
            })
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    let analysis = analyze(
        project.total_budget_usd,
        project.current_exchange_rate,
        &figures,
    );
    Ok(Json(analysis))
}
