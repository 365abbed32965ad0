use std::rc::Rc;

use crate::auth::{authorize_view, LoginOutcome, SessionManager, View, ViewAccess};
use crate::core::{AppConfig, AppError, Clock, KeyValueStore, SystemClock};
use crate::models::dataset::Dataset;
use crate::models::members::Member;
use crate::state_store::StateStore;

/// Application root: owns the dataset store and the session.
pub struct SamityApp {
    pub store: StateStore,
    pub session: SessionManager,
}

impl SamityApp {
    pub fn build(configuration: &AppConfig) -> Result<Self, AppError> {
        let provider = configuration.storage.connect()?;
        Ok(Self::with_provider(provider, Rc::new(SystemClock)))
    }

    pub fn with_provider(provider: Rc<dyn KeyValueStore>, clock: Rc<dyn Clock>) -> Self {
        let store = StateStore::load(Rc::clone(&provider), clock);
        let session = SessionManager::restore(provider, store.dataset());
        Self { store, session }
    }

    pub fn dataset(&self) -> &Dataset {
        self.store.dataset()
    }

    pub fn login(&mut self, identifier: &str, secret: &str) -> LoginOutcome {
        self.session.login(self.store.dataset(), identifier, secret)
    }

    pub fn logout(&mut self) {
        self.session.logout()
    }

    pub fn current_member(&self) -> Option<&Member> {
        self.session.current_member(self.store.dataset())
    }

    pub fn change_password(&mut self, member_id: &str, new_secret: &str) -> Result<Member, AppError> {
        self.session
            .change_password(&mut self.store, member_id, new_secret)
    }

    pub fn authorize(&self, view: View) -> ViewAccess {
        authorize_view(&self.session, view)
    }
}
