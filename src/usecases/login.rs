//! Login use case: check credentials and open a session.

use crate::domain::{User, ValidationError};
use crate::ports::{
    LoginInputBoundary, LoginInputData, LoginOutputBoundary, LoginOutputData,
    LoginUserDataAccess,
};
use std::sync::Arc;
use tracing::info;

pub struct LoginInteractor {
    user_data_access: Arc<dyn LoginUserDataAccess>,
    presenter: Arc<dyn LoginOutputBoundary>,
}

impl LoginInteractor {
    pub fn new(
        user_data_access: Arc<dyn LoginUserDataAccess>,
        presenter: Arc<dyn LoginOutputBoundary>,
    ) -> Self {
        Self {
            user_data_access,
            presenter,
        }
    }

    fn authenticate(&self, input: &LoginInputData) -> Result<User, ValidationError> {
        if !self.user_data_access.exists_by_name(&input.username) {
            return Err(ValidationError::AccountNotFound(input.username.clone()));
        }
        let user = self
            .user_data_access
            .get(&input.username)
            .ok_or_else(|| ValidationError::AccountNotFound(input.username.clone()))?;
        if user.password() != input.password {
            return Err(ValidationError::IncorrectPassword(input.username.clone()));
        }
        Ok(user)
    }
}

impl LoginInputBoundary for LoginInteractor {
    fn execute(&self, input: LoginInputData) {
        match self.authenticate(&input) {
            Ok(user) => {
                let username = user.name().to_owned();
                self.user_data_access
                    .set_current_username(Some(username.clone()));
                info!(username = %username, "user logged in");
                self.presenter
                    .prepare_success_view(LoginOutputData::new(Some(username)));
            }
            Err(e) => {
                info!(username = %input.username, reason = %e, "login rejected");
                self.presenter.prepare_fail_view(e.to_string());
            }
        }
    }

    fn switch_to_signup_view(&self) {
        self.presenter.switch_to_signup_view();
    }
}
