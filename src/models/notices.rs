use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{format_date, overlay, Record};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub content: String,
    /// `YYYY-MM-DD`; kept verbatim when loaded, even if empty.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl Record for Notice {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Notice {
    pub fn apply(&mut self, form: NoticeForm) {
        overlay(&mut self.title, form.title);
        overlay(&mut self.content, form.content);
        overlay(&mut self.date, form.date.map(format_date));
        if form.download_url.is_some() {
            self.download_url = form.download_url;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NoticeForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,
    pub date: Option<NaiveDate>,
    pub download_url: Option<String>,
}
