//! Activity entity model and DTOs.

use chrono::NaiveDate;
use obra_core::status::StatusId;
use obra_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An activity row from the `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub estimated_start_date: NaiveDate,
    pub estimated_end_date: NaiveDate,
    pub actual_start_date: Option<NaiveDate>,
    pub actual_end_date: Option<NaiveDate>,
    pub contractor: Option<String>,
    /// Planned budget in USD, fixed to 2 decimal places.
    pub planned_budget_usd: Decimal,
    /// Actual cost in CRC, if any has been recorded.
    pub actual_cost_crc: Option<Decimal>,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new activity. New activities start as `planned`;
/// the owning project id comes from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivity {
    pub name: String,
    pub description: Option<String>,
    pub estimated_start_date: NaiveDate,
    pub estimated_end_date: NaiveDate,
    pub contractor: Option<String>,
    pub planned_budget_usd: Decimal,
}

/// DTO for updating an existing activity. All fields are optional.
///
/// Status is deliberately absent: status changes go through the transition
/// operation so the actual-date stamping rules cannot be bypassed.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActivity {
    pub name: Option<String>,
    pub description: Option<String>,
    pub estimated_start_date: Option<NaiveDate>,
    pub estimated_end_date: Option<NaiveDate>,
    pub contractor: Option<String>,
    pub planned_budget_usd: Option<Decimal>,
    pub actual_cost_crc: Option<Decimal>,
}

/// DTO for the status-transition operation.
#[derive(Debug, Clone, Deserialize)]
pub struct SetActivityStatus {
    pub status_id: StatusId,
}
