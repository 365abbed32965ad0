use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{overlay, Record};

/// Title used when an upload comes without one ("memory").
pub const DEFAULT_GALLERY_TITLE: &str = "স্মৃতি";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    #[serde(rename = "type", default)]
    pub kind: MediaType,
}

impl Record for GalleryItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl GalleryItem {
    pub fn apply(&mut self, form: GalleryForm) {
        overlay(&mut self.title, form.title);
        overlay(&mut self.description, form.description);
        overlay(&mut self.image_url, form.image_url);
        overlay(&mut self.kind, form.kind);
    }
}

/// Upload form. `kind` is only honoured when editing.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GalleryForm {
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Image url is required"))]
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<MediaType>,
}
