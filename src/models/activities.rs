use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{overlay, Record};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    #[default]
    Planned,
    Ongoing,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ActivityStatus,
}

impl Record for Activity {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Activity {
    pub fn apply(&mut self, form: ActivityForm) {
        overlay(&mut self.title, form.title);
        overlay(&mut self.description, form.description);
        overlay(&mut self.status, form.status);
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ActivityStatus>,
}
