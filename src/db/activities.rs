use crate::core::{timestamp_id, AppError};
use crate::models::activities::{Activity, ActivityForm};
use crate::models::required;
use crate::state_store::StateStore;

use super::{contains_id, delete_record, edit_record, validate_form};

#[tracing::instrument(name = "Saving activity", skip(store, form))]
pub fn upsert_activity(
    store: &mut StateStore,
    form: ActivityForm,
    editing_id: Option<&str>,
) -> Result<Activity, AppError> {
    validate_form(&form)?;

    if let Some(id) = editing_id {
        return edit_record(store, id, |d| &mut d.activities, "Activity", |a| {
            a.apply(form)
        });
    }

    let title = required(form.title, "Title")?;
    let dataset = store.dataset();
    let activity = Activity {
        id: timestamp_id(store.clock(), |id| contains_id(&dataset.activities, id)),
        title,
        description: form.description.unwrap_or_default(),
        status: form.status.unwrap_or_default(),
    };

    let mut next = dataset.clone();
    next.activities.insert(0, activity.clone());
    store.replace(next);
    Ok(activity)
}

#[tracing::instrument(name = "Deleting activity", skip(store))]
pub fn delete_activity(store: &mut StateStore, activity_id: &str) -> bool {
    delete_record(store, activity_id, |d| &mut d.activities)
}
