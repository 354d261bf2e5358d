//! Logout use case: clear the session.
//!
//! The store is set to `None`, never back to the prior user; the prior user
//! travels only in the output data so the presenter can pre-fill the login
//! screen.

use crate::ports::{
    LogoutInputBoundary, LogoutOutputBoundary, LogoutOutputData, LogoutUserDataAccess,
};
use std::sync::Arc;
use tracing::info;

pub struct LogoutInteractor {
    user_data_access: Arc<dyn LogoutUserDataAccess>,
    presenter: Arc<dyn LogoutOutputBoundary>,
}

impl LogoutInteractor {
    pub fn new(
        user_data_access: Arc<dyn LogoutUserDataAccess>,
        presenter: Arc<dyn LogoutOutputBoundary>,
    ) -> Self {
        Self {
            user_data_access,
            presenter,
        }
    }
}

impl LogoutInputBoundary for LogoutInteractor {
    fn execute(&self) {
        let previous = self.user_data_access.get_current_username();
        self.user_data_access.set_current_username(None);
        info!(username = ?previous, "user logged out");

        self.presenter
            .prepare_success_view(LogoutOutputData::new(previous));
    }
}
