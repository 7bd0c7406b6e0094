//! Project entity model and DTOs.

use chrono::NaiveDate;
use obra_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Total budget in USD, fixed to 2 decimal places.
    pub total_budget_usd: Decimal,
    /// CRC per 1 USD, fixed to 4 decimal places.
    pub current_exchange_rate: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub total_budget_usd: Decimal,
    pub current_exchange_rate: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// DTO for updating an existing project. All fields are optional.
///
/// The exchange rate is deliberately absent: rate changes go through the
/// exchange-rate operation so the history log can never drift from the
/// current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub total_budget_usd: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
