//! Presenter for the logout use case.
//!
//! Clears the logged-in screen, pre-fills the login screen with the user who
//! just left, then navigates to it.

use crate::adapters::presentation::state::{LOGIN_VIEW, LoggedInViewModel, LoginViewModel};
use crate::adapters::presentation::view_manager::ViewManagerModel;
use crate::ports::{LogoutOutputBoundary, LogoutOutputData};
use std::sync::Arc;

pub struct LogoutPresenter {
    view_manager: Arc<ViewManagerModel>,
    logged_in_view_model: Arc<LoggedInViewModel>,
    login_view_model: Arc<LoginViewModel>,
}

impl LogoutPresenter {
    pub fn new(
        view_manager: Arc<ViewManagerModel>,
        logged_in_view_model: Arc<LoggedInViewModel>,
        login_view_model: Arc<LoginViewModel>,
    ) -> Self {
        Self {
            view_manager,
            logged_in_view_model,
            login_view_model,
        }
    }
}

impl LogoutOutputBoundary for LogoutPresenter {
    fn prepare_success_view(&self, output: LogoutOutputData) {
        let username = output.username().unwrap_or_default().to_owned();

        self.logged_in_view_model.commit(|s| {
            s.username.clear();
            s.password.clear();
            s.password_error = None;
        });
        self.login_view_model.commit(|s| {
            s.username = username;
            s.password.clear();
            s.error = None;
        });
        self.view_manager.switch_to(LOGIN_VIEW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::presentation::presenters::test_support::{record, record_views};
    use crate::adapters::presentation::state::{LOGGED_IN_VIEW, LoggedInState, LoginState};

    fn setup() -> (Arc<ViewManagerModel>, Arc<LoggedInViewModel>, Arc<LoginViewModel>) {
        let manager = Arc::new(ViewManagerModel::new(LOGGED_IN_VIEW));
        let logged_in = Arc::new(LoggedInViewModel::with_state(LoggedInState {
            username: "Paul".into(),
            password: "draft".into(),
            password_error: Some("New password cannot be empty.".into()),
        }));
        let login = Arc::new(LoginViewModel::with_state(LoginState {
            username: String::new(),
            password: "stale".into(),
            error: Some("old error".into()),
        }));
        (manager, logged_in, login)
    }

    #[test]
    fn success_prefills_login_with_prior_user() {
        let (manager, logged_in, login) = setup();
        let logged_in_seen = record(&logged_in);
        let login_seen = record(&login);
        let views = record_views(&manager);
        let presenter = LogoutPresenter::new(manager.clone(), logged_in.clone(), login.clone());

        presenter.prepare_success_view(LogoutOutputData::new(Some("Paul".into())));

        assert_eq!(*logged_in_seen.lock(), vec![LoggedInState::default()]);
        assert_eq!(
            *login_seen.lock(),
            vec![LoginState {
                username: "Paul".into(),
                password: String::new(),
                error: None,
            }]
        );
        assert_eq!(*views.lock(), vec![LOGIN_VIEW.to_owned()]);
    }

    #[test]
    fn success_without_prior_user_leaves_login_name_empty() {
        let (manager, logged_in, login) = setup();
        let presenter = LogoutPresenter::new(manager.clone(), logged_in, login.clone());

        presenter.prepare_success_view(LogoutOutputData::new(None));

        assert_eq!(login.state().username, "");
        assert_eq!(manager.active_view(), LOGIN_VIEW);
    }
}
