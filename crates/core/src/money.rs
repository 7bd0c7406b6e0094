//! Shared validation helpers for monetary amounts and exchange rates.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Validate that a monetary amount or rate is strictly positive.
///
/// Returns a `CoreError::Validation` naming the field if not.
pub fn validate_positive(value: Decimal, name: &str) -> Result<(), CoreError> {
    if value <= Decimal::ZERO {
        return Err(CoreError::Validation(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}
