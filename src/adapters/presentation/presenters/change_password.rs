//! Presenter for the change-password use case. Never navigates.

use crate::adapters::presentation::state::LoggedInViewModel;
use crate::ports::{ChangePasswordOutputBoundary, ChangePasswordOutputData};
use std::sync::Arc;

pub struct ChangePasswordPresenter {
    logged_in_view_model: Arc<LoggedInViewModel>,
}

impl ChangePasswordPresenter {
    pub fn new(logged_in_view_model: Arc<LoggedInViewModel>) -> Self {
        Self {
            logged_in_view_model,
        }
    }
}

impl ChangePasswordOutputBoundary for ChangePasswordPresenter {
    fn prepare_success_view(&self, _output: ChangePasswordOutputData) {
        self.logged_in_view_model.commit(|s| {
            s.password.clear();
            s.password_error = None;
        });
    }

    fn prepare_fail_view(&self, error: String) {
        self.logged_in_view_model
            .commit(|s| s.password_error = Some(error));
    }
}
