//! Sign-up use case: register a user and open a session for them.

use crate::domain::{PasswordPolicy, UserFactory, ValidationError};
use crate::ports::{
    SignupInputBoundary, SignupInputData, SignupOutputBoundary, SignupOutputData,
    SignupUserDataAccess,
};
use std::sync::Arc;
use tracing::info;

pub struct SignupInteractor {
    user_data_access: Arc<dyn SignupUserDataAccess>,
    presenter: Arc<dyn SignupOutputBoundary>,
    user_factory: Arc<dyn UserFactory>,
    policy: PasswordPolicy,
}

impl SignupInteractor {
    pub fn new(
        user_data_access: Arc<dyn SignupUserDataAccess>,
        presenter: Arc<dyn SignupOutputBoundary>,
        user_factory: Arc<dyn UserFactory>,
        policy: PasswordPolicy,
    ) -> Self {
        Self {
            user_data_access,
            presenter,
            user_factory,
            policy,
        }
    }

    fn validate(&self, input: &SignupInputData) -> Result<(), ValidationError> {
        if input.username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        if self.user_data_access.exists_by_name(&input.username) {
            return Err(ValidationError::UserExists);
        }
        if input.password != input.repeat_password {
            return Err(ValidationError::PasswordMismatch);
        }
        self.policy.check(&input.password)
    }
}

impl SignupInputBoundary for SignupInteractor {
    fn execute(&self, mut input: SignupInputData) {
        input.username = input.username.trim().to_owned();
        if let Err(e) = self.validate(&input) {
            info!(username = %input.username, reason = %e, "signup rejected");
            self.presenter.prepare_fail_view(e.to_string());
            return;
        }

        let user = self.user_factory.create(&input.username, &input.password);
        self.user_data_access.save(user);
        self.user_data_access
            .set_current_username(Some(input.username.clone()));
        info!(username = %input.username, "user signed up");

        self.presenter
            .prepare_success_view(SignupOutputData::new(Some(input.username)));
    }

    fn switch_to_login_view(&self) {
        self.presenter.switch_to_login_view();
    }
}
