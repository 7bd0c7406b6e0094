//! Repository for the `projects` table.

use obra_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, total_budget_usd, current_exchange_rate, \
     start_date, end_date, created_at, updated_at";

/// Provides CRUD operations for projects, plus the transactional
/// exchange-rate update.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                 (name, description, total_budget_usd, current_exchange_rate,
                  start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.total_budget_usd)
            .bind(input.current_exchange_rate)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. The exchange
    /// rate is not touched here; see [`ProjectRepo::update_exchange_rate`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                total_budget_usd = COALESCE($4, total_budget_usd),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.total_budget_usd)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the project's current exchange rate and append a history
    /// entry, as one transaction.
    ///
    /// Returns `None` (and writes nothing) if no row with the given `id`
    /// exists. A rate equal to the current one is still recorded.
    pub async fn update_exchange_rate(
        pool: &PgPool,
        id: DbId,
        new_rate: Decimal,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET current_exchange_rate = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(new_rate)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(project) = project else {
            // Dropping the transaction rolls back; no history row is left.
            return Ok(None);
        };

        sqlx::query(
            "INSERT INTO exchange_rate_history (project_id, usd_to_crc_rate)
             VALUES ($1, $2)",
        )
        .bind(id)
        .bind(new_rate)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(project))
    }
}
