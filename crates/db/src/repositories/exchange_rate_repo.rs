//! Repository for the append-only `exchange_rate_history` table.
//!
//! History rows are written by [`ProjectRepo::update_exchange_rate`] inside
//! the same transaction that overwrites the project's current rate; this
//! repository only reads.
//!
//! [`ProjectRepo::update_exchange_rate`]: crate::repositories::ProjectRepo::update_exchange_rate

use obra_core::types::DbId;
use sqlx::PgPool;

use crate::models::exchange_rate::ExchangeRateHistoryEntry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, usd_to_crc_rate, effective_date, created_at";

/// Read access to a project's exchange-rate audit trail.
pub struct ExchangeRateRepo;

impl ExchangeRateRepo {
    /// List a project's rate history, newest first.
    ///
    /// An unknown project id yields an empty list, not an error.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ExchangeRateHistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exchange_rate_history
             WHERE project_id = $1
             ORDER BY effective_date DESC, id DESC"
        );
        sqlx::query_as::<_, ExchangeRateHistoryEntry>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
