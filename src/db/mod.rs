use validator::Validate;

use crate::core::AppError;
use crate::models::dataset::Dataset;
use crate::models::Record;
use crate::state_store::StateStore;

pub mod activities;
pub mod gallery;
pub mod members;
pub mod messages;
pub mod notices;
pub mod reports;
pub mod settings;
pub mod transactions;

/// Picks one collection out of a dataset.
pub(crate) type Collection<T> = fn(&mut Dataset) -> &mut Vec<T>;

pub(crate) fn validate_form<F: Validate>(form: &F) -> Result<(), AppError> {
    form.validate().map_err(|errors| {
        tracing::warn!(error.message = %errors, "form rejected");
        AppError::from(errors)
    })
}

pub(crate) fn contains_id<T: Record>(items: &[T], id: &str) -> bool {
    items.iter().any(|item| item.id() == id)
}

/// Applies `edit` to the record with `id` and stores the result.
pub(crate) fn edit_record<T, E>(
    store: &mut StateStore,
    id: &str,
    collection: Collection<T>,
    label: &str,
    edit: E,
) -> Result<T, AppError>
where
    T: Record + Clone,
    E: FnOnce(&mut T),
{
    let mut next = store.dataset().clone();
    let updated = {
        let record = collection(&mut next)
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| AppError::not_found(format!("{} {}", label, id)))?;
        edit(record);
        record.clone()
    };
    store.replace(next);
    Ok(updated)
}

/// Removes the record with `id`. Returns false, without touching the store, when nothing matched.
pub(crate) fn delete_record<T: Record>(
    store: &mut StateStore,
    id: &str,
    collection: Collection<T>,
) -> bool {
    let mut next = store.dataset().clone();
    let items = collection(&mut next);
    let before = items.len();
    items.retain(|item| item.id() != id);
    if items.len() == before {
        tracing::debug!(id, "nothing to delete");
        return false;
    }
    store.replace(next);
    true
}
