use crate::core::{timestamp_id, AppError, MESSAGE_DATE_FORMAT};
use crate::models::messages::{Message, MessageForm};
use crate::models::required;
use crate::state_store::StateStore;

use super::{contains_id, delete_record, edit_record, validate_form};

// Contact form submission from a visitor or member
#[tracing::instrument(name = "Submitting message", skip(store, form))]
pub fn submit_message(store: &mut StateStore, form: MessageForm) -> Result<Message, AppError> {
    validate_form(&form)?;

    let sender_name = required(form.sender_name, "Name")?;
    let mobile = required(form.mobile, "Mobile number")?;
    let text = required(form.text, "Message text")?;

    let dataset = store.dataset();
    let now = store.clock().now();
    let message = Message {
        id: timestamp_id(store.clock(), |id| contains_id(&dataset.messages, id)),
        member_id: form.member_id,
        sender_name,
        mobile,
        text,
        reply: None,
        date: now.format(MESSAGE_DATE_FORMAT).to_string(),
        is_read: false,
    };

    let mut next = dataset.clone();
    next.messages.insert(0, message.clone());
    store.replace(next);
    Ok(message)
}

#[tracing::instrument(name = "Saving message", skip(store, form))]
pub fn upsert_message(
    store: &mut StateStore,
    form: MessageForm,
    editing_id: Option<&str>,
) -> Result<Message, AppError> {
    match editing_id {
        Some(id) => {
            validate_form(&form)?;
            edit_record(store, id, |d| &mut d.messages, "Message", |m| m.apply(form))
        }
        None => submit_message(store, form),
    }
}

// Answer a message; answering also marks it read
#[tracing::instrument(name = "Replying to message", skip(store, text))]
pub fn set_reply(store: &mut StateStore, message_id: &str, text: &str) -> Result<Message, AppError> {
    if text.is_empty() {
        tracing::warn!("empty reply rejected");
        return Err(AppError::validation_error("Reply text is required"));
    }
    let text = text.to_string();
    edit_record(store, message_id, |d| &mut d.messages, "Message", |m| {
        m.set_reply(text)
    })
}

// Withdraw a reply so it can be rewritten; the message is pending again
#[tracing::instrument(name = "Clearing reply", skip(store))]
pub fn clear_reply(store: &mut StateStore, message_id: &str) -> Result<Message, AppError> {
    edit_record(store, message_id, |d| &mut d.messages, "Message", |m| {
        m.clear_reply()
    })
}

#[tracing::instrument(name = "Deleting message", skip(store))]
pub fn delete_message(store: &mut StateStore, message_id: &str) -> bool {
    delete_record(store, message_id, |d| &mut d.messages)
}
