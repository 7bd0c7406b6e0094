//! Exchange-rate history entity model and DTOs.

use obra_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the append-only `exchange_rate_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExchangeRateHistoryEntry {
    pub id: DbId,
    pub project_id: DbId,
    /// CRC per 1 USD, fixed to 4 decimal places.
    pub usd_to_crc_rate: Decimal,
    pub effective_date: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for the exchange-rate update operation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExchangeRate {
    pub usd_to_crc_rate: Decimal,
}
