use crate::core::{random_member_id, AppError};
use crate::models::members::{Member, MemberForm, DEFAULT_MEMBER_PASSWORD};
use crate::models::{format_date, required};
use crate::state_store::StateStore;

use super::{delete_record, edit_record, validate_form};

// Create or edit a member
#[tracing::instrument(name = "Saving member", skip(store, form))]
pub fn upsert_member(
    store: &mut StateStore,
    form: MemberForm,
    editing_id: Option<&str>,
) -> Result<Member, AppError> {
    validate_form(&form)?;

    match editing_id {
        Some(id) => edit_record(store, id, |d| &mut d.members, "Member", |m| m.apply(form)),
        None => create_member(store, form),
    }
}

fn create_member(store: &mut StateStore, form: MemberForm) -> Result<Member, AppError> {
    let name = required(form.name, "Name")?;
    let mobile = required(form.mobile, "Mobile number")?;

    let dataset = store.dataset();
    let id = match form.id {
        Some(id) if dataset.member(&id).is_some() => {
            tracing::warn!(member_id = %id, "member id already taken");
            return Err(AppError::validation_error(format!(
                "Member id {} is already taken",
                id
            )));
        }
        Some(id) => id,
        None => random_member_id(|candidate| dataset.member(candidate).is_some())?,
    };

    let member = Member {
        id,
        name,
        mobile,
        password: form
            .password
            .or_else(|| Some(DEFAULT_MEMBER_PASSWORD.to_string())),
        join_date: format_date(form.join_date.unwrap_or_else(|| store.clock().today())),
        total_savings: form.total_savings.unwrap_or_default(),
        image_url: form.image_url,
        performance: form.performance.unwrap_or_default(),
    };

    let mut next = dataset.clone();
    next.members.push(member.clone());
    store.replace(next);

    tracing::info!(member_id = %member.id, "member created");
    Ok(member)
}

// Delete member; their transactions stay behind
#[tracing::instrument(name = "Deleting member", skip(store))]
pub fn delete_member(store: &mut StateStore, member_id: &str) -> bool {
    delete_record(store, member_id, |d| &mut d.members)
}

/// Replaces only the password of an existing member.
pub(crate) fn set_member_password(
    store: &mut StateStore,
    member_id: &str,
    new_password: String,
) -> Result<Member, AppError> {
    edit_record(store, member_id, |d| &mut d.members, "Member", |m| {
        m.password = Some(new_password)
    })
}
