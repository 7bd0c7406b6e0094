//! Repository for the `activities` table.

use obra_core::status::{transition_dates, ActivityStatus};
use obra_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::{Activity, CreateActivity, UpdateActivity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, description, estimated_start_date, \
     estimated_end_date, actual_start_date, actual_end_date, contractor, \
     planned_budget_usd, actual_cost_crc, status_id, created_at, updated_at";

/// Provides CRUD operations for activities, plus the status transition.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity for a project, returning the created row.
    ///
    /// The status defaults to 1 (planned) in the schema.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateActivity,
    ) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities
                 (project_id, name, description, estimated_start_date,
                  estimated_end_date, contractor, planned_budget_usd)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.estimated_start_date)
            .bind(input.estimated_end_date)
            .bind(&input.contractor)
            .bind(input.planned_budget_usd)
            .fetch_one(pool)
            .await
    }

    /// Find an activity by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = $1");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's activities in schedule order.
    ///
    /// An unknown project id yields an empty list, not an error.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities
             WHERE project_id = $1
             ORDER BY estimated_start_date, id"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update an activity. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. Status is not
    /// touched here; see [`ActivityRepo::set_status`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActivity,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!(
            "UPDATE activities SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                estimated_start_date = COALESCE($4, estimated_start_date),
                estimated_end_date = COALESCE($5, estimated_end_date),
                contractor = COALESCE($6, contractor),
                planned_budget_usd = COALESCE($7, planned_budget_usd),
                actual_cost_crc = COALESCE($8, actual_cost_crc),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.estimated_start_date)
            .bind(input.estimated_end_date)
            .bind(&input.contractor)
            .bind(input.planned_budget_usd)
            .bind(input.actual_cost_crc)
            .fetch_optional(pool)
            .await
    }

    /// Transition an activity to a new status, stamping actual dates per
    /// the core transition rules.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: ActivityStatus,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let dates = transition_dates(status);
        let stamp_start = if dates.stamps_start_if_unset {
            ", actual_start_date = COALESCE(actual_start_date, CURRENT_DATE)"
        } else {
            ""
        };
        let stamp_end = if dates.stamps_end {
            ", actual_end_date = CURRENT_DATE"
        } else {
            ""
        };

        let query = format!(
            "UPDATE activities SET status_id = $2, updated_at = NOW(){stamp_start}{stamp_end}
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .bind(status.id())
            .fetch_optional(pool)
            .await
    }
}
