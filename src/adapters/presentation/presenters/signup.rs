//! Presenter for the sign-up use case.

use crate::adapters::presentation::state::{
    LOGGED_IN_VIEW, LOGIN_VIEW, LoggedInViewModel, SignupState, SignupViewModel,
};
use crate::adapters::presentation::view_manager::ViewManagerModel;
use crate::ports::{SignupOutputBoundary, SignupOutputData};
use std::sync::Arc;

pub struct SignupPresenter {
    view_manager: Arc<ViewManagerModel>,
    signup_view_model: Arc<SignupViewModel>,
    logged_in_view_model: Arc<LoggedInViewModel>,
}

impl SignupPresenter {
    pub fn new(
        view_manager: Arc<ViewManagerModel>,
        signup_view_model: Arc<SignupViewModel>,
        logged_in_view_model: Arc<LoggedInViewModel>,
    ) -> Self {
        Self {
            view_manager,
            signup_view_model,
            logged_in_view_model,
        }
    }
}

impl SignupOutputBoundary for SignupPresenter {
    fn prepare_success_view(&self, output: SignupOutputData) {
        let username = output.username().unwrap_or_default().to_owned();

        self.signup_view_model.set_state(SignupState::default());
        self.logged_in_view_model.commit(|s| {
            s.username = username;
            s.password.clear();
            s.password_error = None;
        });
        self.view_manager.switch_to(LOGGED_IN_VIEW);
    }

    fn prepare_fail_view(&self, error: String) {
        self.signup_view_model.commit(|s| {
            s.password.clear();
            s.repeat_password.clear();
            s.error = Some(error);
        });
    }

    fn switch_to_login_view(&self) {
        self.view_manager.switch_to(LOGIN_VIEW);
    }
}
