use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::core::AppError;

pub mod activities;
pub mod dataset;
pub mod gallery;
pub mod members;
pub mod messages;
pub mod notices;
pub mod settings;
pub mod transactions;

/// Calendar dates are persisted as `YYYY-MM-DD` text. Stored values are kept as
/// written, including empty ones, so older snapshots always load.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Anything stored in a dataset collection, keyed by a string id.
pub trait Record {
    fn id(&self) -> &str;
}

/// Patch precedence: a present value overwrites, an absent one keeps the old value.
pub(crate) fn overlay<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Presence check for fields a new record cannot do without.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| {
        tracing::warn!(field, "required field missing");
        AppError::validation_error(format!("{} is required", field))
    })
}

pub(crate) fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("amount_not_positive"))
    }
}

pub(crate) fn validate_non_negative_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        Err(ValidationError::new("amount_negative"))
    } else {
        Ok(())
    }
}
