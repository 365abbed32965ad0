use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{format_date, overlay, validate_positive_amount, Record};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Savings,
    Withdraw,
    Penalty,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Paid,
    Pending,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Not checked against the member list; readers fall back to a placeholder.
    pub member_id: String,
    pub amount: Decimal,
    /// `YYYY-MM-DD`; kept verbatim when loaded, even if empty.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
}

impl Record for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Transaction {
    pub fn counts_as_savings(&self) -> bool {
        self.kind == TransactionType::Savings && self.status == TransactionStatus::Paid
    }

    pub fn apply(&mut self, form: TransactionForm) {
        overlay(&mut self.member_id, form.member_id);
        overlay(&mut self.amount, form.amount);
        overlay(&mut self.date, form.date.map(format_date));
        overlay(&mut self.kind, form.kind);
        overlay(&mut self.status, form.status);
    }
}

/// Ledger entry form. `status` is only honoured when editing; new entries are always paid.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransactionForm {
    #[validate(length(min = 1, message = "Member is required"))]
    pub member_id: Option<String>,
    #[validate(custom = "validate_positive_amount")]
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub status: Option<TransactionStatus>,
}
