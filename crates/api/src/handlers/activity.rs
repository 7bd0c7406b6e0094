//! Handlers for activities, both project-scoped and standalone.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use obra_core::error::CoreError;
use obra_core::money::validate_positive;
use obra_core::status::ActivityStatus;
use obra_core::types::DbId;
use obra_db::models::activity::{Activity, CreateActivity, SetActivityStatus, UpdateActivity};
use obra_db::repositories::{ActivityRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/activities
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateActivity>,
) -> AppResult<(StatusCode, Json<Activity>)> {
    validate_positive(input.planned_budget_usd, "planned_budget_usd")?;

    // Creating under a missing project is Not-Found, unlike listing.
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let activity = ActivityRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /api/v1/projects/{project_id}/activities
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Activity>>> {
    let activities = ActivityRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(activities))
}

/// PUT /api/v1/activities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActivity>,
) -> AppResult<Json<Activity>> {
    if let Some(budget) = input.planned_budget_usd {
        validate_positive(budget, "planned_budget_usd")?;
    }

    let activity = ActivityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))?;
    Ok(Json(activity))
}

/// PUT /api/v1/activities/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetActivityStatus>,
) -> AppResult<Json<Activity>> {
    let status = ActivityStatus::from_id(input.status_id)?;

    let activity = ActivityRepo::set_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))?;
    Ok(Json(activity))
}
