//! Presenter for the login use case.

use crate::adapters::presentation::state::{
    LOGGED_IN_VIEW, LoggedInViewModel, LoginViewModel, SIGNUP_VIEW,
};
use crate::adapters::presentation::view_manager::ViewManagerModel;
use crate::ports::{LoginOutputBoundary, LoginOutputData};
use std::sync::Arc;

pub struct LoginPresenter {
    view_manager: Arc<ViewManagerModel>,
    login_view_model: Arc<LoginViewModel>,
    logged_in_view_model: Arc<LoggedInViewModel>,
}

impl LoginPresenter {
    pub fn new(
        view_manager: Arc<ViewManagerModel>,
        login_view_model: Arc<LoginViewModel>,
        logged_in_view_model: Arc<LoggedInViewModel>,
    ) -> Self {
        Self {
            view_manager,
            login_view_model,
            logged_in_view_model,
        }
    }
}

impl LoginOutputBoundary for LoginPresenter {
    fn prepare_success_view(&self, output: LoginOutputData) {
        let username = output.username().unwrap_or_default().to_owned();

        self.logged_in_view_model.commit(|s| {
            s.username = username;
            s.password.clear();
            s.password_error = None;
        });
        self.login_view_model.commit(|s| {
            s.password.clear();
            s.error = None;
        });
        self.view_manager.switch_to(LOGGED_IN_VIEW);
    }

    fn prepare_fail_view(&self, error: String) {
        self.login_view_model.commit(|s| {
            s.password.clear();
            s.error = Some(error);
        });
    }

    fn switch_to_signup_view(&self) {
        self.view_manager.switch_to(SIGNUP_VIEW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::presentation::presenters::test_support::{record, record_views};
    use crate::adapters::presentation::state::{LOGIN_VIEW, LoginState};

    fn presenter() -> (
        Arc<ViewManagerModel>,
        Arc<LoginViewModel>,
        Arc<LoggedInViewModel>,
        LoginPresenter,
    ) {
        let manager = Arc::new(ViewManagerModel::new(LOGIN_VIEW));
        let login = Arc::new(LoginViewModel::with_state(LoginState {
            username: "Paul".into(),
            password: "password".into(),
            error: Some("Incorrect password for \"Paul\".".into()),
        }));
        let logged_in = Arc::new(LoggedInViewModel::new());
        let presenter = LoginPresenter::new(manager.clone(), login.clone(), logged_in.clone());
        (manager, login, logged_in, presenter)
    }

    #[test]
    fn success_fills_logged_in_and_clears_login_secrets() {
        let (manager, login, logged_in, presenter) = presenter();
        let login_seen = record(&login);
        let logged_in_seen = record(&logged_in);
        let views = record_views(&manager);

        presenter.prepare_success_view(LoginOutputData::new(Some("Paul".into())));

        assert_eq!(logged_in_seen.lock().len(), 1);
        assert_eq!(logged_in.state().username, "Paul");
        assert_eq!(
            *login_seen.lock(),
            vec![LoginState {
                username: "Paul".into(),
                password: String::new(),
                error: None,
            }]
        );
        assert_eq!(*views.lock(), vec![LOGGED_IN_VIEW.to_owned()]);
    }

    #[test]
    fn failure_sets_error_without_navigation() {
        let (manager, login, _, presenter) = presenter();
        let login_seen = record(&login);

        presenter.prepare_fail_view("Ada: Account does not exist.".into());

        assert_eq!(login_seen.lock().len(), 1);
        assert_eq!(
            login.state().error.as_deref(),
            Some("Ada: Account does not exist.")
        );
        assert_eq!(manager.active_view(), LOGIN_VIEW);
    }

    #[test]
    fn switch_to_signup_view_navigates() {
        let (manager, _, _, presenter) = presenter();

        presenter.switch_to_signup_view();

        assert_eq!(manager.active_view(), SIGNUP_VIEW);
    }
}
