use crate::core::AppError;
use crate::models::settings::{SamitySettings, SettingsPatch};
use crate::state_store::StateStore;

use super::validate_form;

#[tracing::instrument(name = "Updating settings", skip(store, patch))]
pub fn update_settings(
    store: &mut StateStore,
    patch: SettingsPatch,
) -> Result<SamitySettings, AppError> {
    validate_form(&patch)?;

    let password_changed = patch.admin_password.is_some();
    let mut next = store.dataset().clone();
    next.settings.apply(patch);
    let settings = next.settings.clone();
    store.replace(next);

    if password_changed {
        tracing::info!("administrator password changed");
    }
    Ok(settings)
}
