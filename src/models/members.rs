use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{format_date, overlay, validate_non_negative_amount, Record};

/// Password given to members created without one.
pub const DEFAULT_MEMBER_PASSWORD: &str = "123456";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Performance {
    Red,
    #[default]
    Yellow,
    Green,
}

impl Performance {
    pub fn label(&self) -> &'static str {
        match self {
            Performance::Green => "চমৎকার (Good)",
            Performance::Yellow => "চলমান (Average)",
            Performance::Red => "অনিয়মিত (Poor)",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// `YYYY-MM-DD`; kept verbatim when loaded, even if empty.
    pub join_date: String,
    /// Advisory only; balances are derived from transactions.
    #[serde(default)]
    pub total_savings: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub performance: Performance,
}

impl Record for Member {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Member {
    /// Merges an edit form. The id is permanent and never taken from the form.
    pub fn apply(&mut self, form: MemberForm) {
        overlay(&mut self.name, form.name);
        overlay(&mut self.mobile, form.mobile);
        if form.password.is_some() {
            self.password = form.password;
        }
        overlay(&mut self.join_date, form.join_date.map(format_date));
        overlay(&mut self.total_savings, form.total_savings);
        if form.image_url.is_some() {
            self.image_url = form.image_url;
        }
        overlay(&mut self.performance, form.performance);
    }
}

/// Create-or-edit form for a member. On create `name` and `mobile` are required.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberForm {
    #[validate(length(min = 1, message = "Member id cannot be empty"))]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: Option<String>,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: Option<String>,
    pub join_date: Option<NaiveDate>,
    #[validate(custom = "validate_non_negative_amount")]
    pub total_savings: Option<Decimal>,
    pub image_url: Option<String>,
    pub performance: Option<Performance>,
}
