use crate::core::{timestamp_id, AppError};
use crate::models::gallery::{GalleryForm, GalleryItem, MediaType, DEFAULT_GALLERY_TITLE};
use crate::models::required;
use crate::state_store::StateStore;

use super::{contains_id, delete_record, edit_record, validate_form};

// Upload or edit a gallery item
#[tracing::instrument(name = "Saving gallery item", skip(store, form))]
pub fn upsert_gallery_item(
    store: &mut StateStore,
    form: GalleryForm,
    editing_id: Option<&str>,
) -> Result<GalleryItem, AppError> {
    validate_form(&form)?;

    if let Some(id) = editing_id {
        return edit_record(store, id, |d| &mut d.gallery, "Gallery item", |g| {
            g.apply(form)
        });
    }

    let image_url = required(form.image_url, "Image url")?;
    let dataset = store.dataset();
    let item = GalleryItem {
        id: timestamp_id(store.clock(), |id| contains_id(&dataset.gallery, id)),
        title: form
            .title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| DEFAULT_GALLERY_TITLE.to_string()),
        description: form.description.unwrap_or_default(),
        image_url,
        kind: MediaType::Image,
    };

    let mut next = dataset.clone();
    next.gallery.insert(0, item.clone());
    store.replace(next);
    Ok(item)
}

#[tracing::instrument(name = "Deleting gallery item", skip(store))]
pub fn delete_gallery_item(store: &mut StateStore, item_id: &str) -> bool {
    delete_record(store, item_id, |d| &mut d.gallery)
}
