use crate::core::{timestamp_id, AppError};
use crate::models::notices::{Notice, NoticeForm};
use crate::models::{format_date, required};
use crate::state_store::StateStore;

use super::{contains_id, delete_record, edit_record, validate_form};

// Publish or edit a notice; new notices go to the top of the board
#[tracing::instrument(name = "Saving notice", skip(store, form))]
pub fn upsert_notice(
    store: &mut StateStore,
    form: NoticeForm,
    editing_id: Option<&str>,
) -> Result<Notice, AppError> {
    validate_form(&form)?;

    match editing_id {
        Some(id) => edit_record(store, id, |d| &mut d.notices, "Notice", |n| n.apply(form)),
        None => {
            let title = required(form.title, "Title")?;
            let content = required(form.content, "Content")?;

            let dataset = store.dataset();
            let notice = Notice {
                id: timestamp_id(store.clock(), |id| contains_id(&dataset.notices, id)),
                title,
                content,
                date: format_date(form.date.unwrap_or_else(|| store.clock().today())),
                download_url: form.download_url,
            };

            let mut next = dataset.clone();
            next.notices.insert(0, notice.clone());
            store.replace(next);
            Ok(notice)
        }
    }
}

#[tracing::instrument(name = "Deleting notice", skip(store))]
pub fn delete_notice(store: &mut StateStore, notice_id: &str) -> bool {
    delete_record(store, notice_id, |d| &mut d.notices)
}
