use std::rc::Rc;

use crate::core::{
    read_json, write_json, AppError, KeyValueStore, ADMIN_FLAG_KEY, MEMBER_SESSION_KEY,
};
use crate::db::members::set_member_password;
use crate::models::dataset::Dataset;
use crate::models::members::Member;
use crate::state_store::StateStore;

use super::secret_matches;

/// Login name reserved for the administrator, compared case-insensitively.
pub const ADMIN_IDENTIFIER: &str = "admin";
const ADMIN_FLAG_VALUE: &str = "true";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIdentity {
    Anonymous,
    /// Holds the member id.
    Member(String),
    Administrator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Admin,
    Member,
    Rejected,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, LoginOutcome::Rejected)
    }

    /// Turns a rejection into the generic credentials error shown to the user.
    pub fn ok_or_unauthorized(self) -> Result<Self, AppError> {
        match self {
            LoginOutcome::Rejected => Err(AppError::unauthorized()),
            outcome => Ok(outcome),
        }
    }
}

/// Who is using the app right now. Persisted apart from the dataset.
pub struct SessionManager {
    provider: Rc<dyn KeyValueStore>,
    identity: SessionIdentity,
}

impl SessionManager {
    pub fn new(provider: Rc<dyn KeyValueStore>) -> Self {
        Self {
            provider,
            identity: SessionIdentity::Anonymous,
        }
    }

    /// Picks up the session saved by a previous run.
    #[tracing::instrument(name = "Restoring session", skip(provider, dataset))]
    pub fn restore(provider: Rc<dyn KeyValueStore>, dataset: &Dataset) -> Self {
        let mut manager = Self::new(provider);
        manager.identity = manager.read_identity(dataset);
        manager
    }

    fn read_identity(&self, dataset: &Dataset) -> SessionIdentity {
        match self.provider.get(ADMIN_FLAG_KEY) {
            Ok(Some(flag)) if flag == ADMIN_FLAG_VALUE => return SessionIdentity::Administrator,
            Ok(_) => {}
            Err(e) => tracing::warn!(error.message = %e, "could not read administrator flag"),
        }

        match read_json::<Member>(self.provider.as_ref(), MEMBER_SESSION_KEY) {
            Ok(Some(member)) if dataset.member(&member.id).is_some() => {
                SessionIdentity::Member(member.id)
            }
            Ok(Some(member)) => {
                tracing::info!(member_id = %member.id, "session member no longer exists");
                self.forget(MEMBER_SESSION_KEY);
                SessionIdentity::Anonymous
            }
            Ok(None) => SessionIdentity::Anonymous,
            Err(e) => {
                tracing::warn!(error.message = %e.message(), "discarding unreadable member session");
                self.forget(MEMBER_SESSION_KEY);
                SessionIdentity::Anonymous
            }
        }
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn is_admin(&self) -> bool {
        self.identity == SessionIdentity::Administrator
    }

    pub fn member_id(&self) -> Option<&str> {
        match &self.identity {
            SessionIdentity::Member(id) => Some(id),
            _ => None,
        }
    }

    /// The session member as it currently stands in `dataset`.
    pub fn current_member<'a>(&self, dataset: &'a Dataset) -> Option<&'a Member> {
        self.member_id().and_then(|id| dataset.member(id))
    }

    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::forbidden_error("Administrator access required"))
        }
    }

    /// The administrator check runs first, then members by id with either their
    /// password or their mobile number as the secret.
    #[tracing::instrument(name = "Login attempt", skip(self, dataset, secret))]
    pub fn login(&mut self, dataset: &Dataset, identifier: &str, secret: &str) -> LoginOutcome {
        if identifier.to_lowercase() == ADMIN_IDENTIFIER
            && secret_matches(Some(dataset.settings.admin_password()), secret)
        {
            self.forget(MEMBER_SESSION_KEY);
            self.store_flag();
            self.identity = SessionIdentity::Administrator;
            tracing::info!("administrator logged in");
            return LoginOutcome::Admin;
        }

        let member = dataset.members.iter().find(|m| {
            m.id == identifier
                && (secret_matches(m.password.as_deref(), secret)
                    || secret_matches(Some(&m.mobile), secret))
        });

        match member {
            Some(member) => {
                self.forget(ADMIN_FLAG_KEY);
                self.remember_member(member);
                self.identity = SessionIdentity::Member(member.id.clone());
                tracing::info!("member logged in");
                LoginOutcome::Member
            }
            None => {
                tracing::warn!("login rejected");
                LoginOutcome::Rejected
            }
        }
    }

    #[tracing::instrument(name = "Logout", skip(self))]
    pub fn logout(&mut self) {
        self.identity = SessionIdentity::Anonymous;
        self.forget(MEMBER_SESSION_KEY);
        self.forget(ADMIN_FLAG_KEY);
    }

    /// Sets a new password for the logged-in member. The old password is not asked for.
    #[tracing::instrument(name = "Changing member password", skip(self, store, new_secret))]
    pub fn change_password(
        &mut self,
        store: &mut StateStore,
        member_id: &str,
        new_secret: &str,
    ) -> Result<Member, AppError> {
        if self.member_id() != Some(member_id) {
            tracing::warn!("password change without a matching member session");
            return Err(AppError::forbidden_error(
                "Log in as this member to change the password",
            ));
        }
        if new_secret.is_empty() {
            return Err(AppError::validation_error("New password is required"));
        }

        let member = set_member_password(store, member_id, new_secret.to_string())?;
        self.remember_member(&member);
        Ok(member)
    }

    fn remember_member(&self, member: &Member) {
        if let Err(e) = write_json(self.provider.as_ref(), MEMBER_SESSION_KEY, member) {
            tracing::error!(error.message = %e.message(), "failed to persist member session");
        }
    }

    fn store_flag(&self) {
        if let Err(e) = self.provider.set(ADMIN_FLAG_KEY, ADMIN_FLAG_VALUE) {
            tracing::error!(error.message = %e, "failed to persist administrator flag");
        }
    }

    fn forget(&self, key: &str) {
        if let Err(e) = self.provider.remove(key) {
            tracing::error!(error.message = %e, key, "failed to clear session record");
        }
    }
}
