use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{overlay, Record};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    pub sender_name: String,
    pub mobile: String,
    pub text: String,
    /// Absent while the message is pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    pub date: String,
    #[serde(default)]
    pub is_read: bool,
}

impl Record for Message {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Message {
    pub fn is_pending(&self) -> bool {
        self.reply.is_none()
    }

    pub fn set_reply(&mut self, text: String) {
        self.reply = Some(text);
        self.is_read = true;
    }

    /// Back to pending. The read flag is left as it was.
    pub fn clear_reply(&mut self) {
        self.reply = None;
    }

    pub fn apply(&mut self, form: MessageForm) {
        if form.member_id.is_some() {
            self.member_id = form.member_id;
        }
        overlay(&mut self.sender_name, form.sender_name);
        overlay(&mut self.mobile, form.mobile);
        overlay(&mut self.text, form.text);
    }
}

/// Contact form; all three text fields are required for a new message.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MessageForm {
    pub member_id: Option<String>,
    #[validate(length(min = 1, message = "Name is required"))]
    pub sender_name: Option<String>,
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: Option<String>,
    #[validate(length(min = 1, message = "Message text is required"))]
    pub text: Option<String>,
}
