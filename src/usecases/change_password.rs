//! Change-password use case: replace a user's stored password.

use crate::domain::{PasswordPolicy, UserFactory, ValidationError};
use crate::ports::{
    ChangePasswordInputBoundary, ChangePasswordInputData, ChangePasswordOutputBoundary,
    ChangePasswordOutputData, ChangePasswordUserDataAccess,
};
use std::sync::Arc;
use tracing::info;

pub struct ChangePasswordInteractor {
    user_data_access: Arc<dyn ChangePasswordUserDataAccess>,
    presenter: Arc<dyn ChangePasswordOutputBoundary>,
    user_factory: Arc<dyn UserFactory>,
    policy: PasswordPolicy,
}

impl ChangePasswordInteractor {
    pub fn new(
        user_data_access: Arc<dyn ChangePasswordUserDataAccess>,
        presenter: Arc<dyn ChangePasswordOutputBoundary>,
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

    fn validate(&self, input: &ChangePasswordInputData) -> Result<(), ValidationError> {
        self.policy.check(&input.password)?;
        if !self.user_data_access.exists_by_name(&input.username) {
            return Err(ValidationError::AccountNotFound(input.username.clone()));
        }
        Ok(())
    }
}

impl ChangePasswordInputBoundary for ChangePasswordInteractor {
    fn execute(&self, input: ChangePasswordInputData) {
        if let Err(e) = self.validate(&input) {
            info!(username = %input.username, reason = %e, "password change rejected");
            self.presenter.prepare_fail_view(e.to_string());
            return;
        }

        let user = self.user_factory.create(&input.username, &input.password);
        self.user_data_access.change_password(user);
        info!(username = %input.username, "password changed");

        self.presenter
            .prepare_success_view(ChangePasswordOutputData::new(Some(input.username)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::InMemoryUserDataAccess;
    use crate::domain::{CommonUserFactory, User};
    use crate::ports::outbound::MockChangePasswordOutputBoundary;
    use crate::ports::{LoginUserDataAccess, SignupUserDataAccess};
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> Arc<InMemoryUserDataAccess> {
        let store = Arc::new(InMemoryUserDataAccess::new());
        store.save(User::new("Paul", "password"));
        SignupUserDataAccess::set_current_username(&*store, Some("Paul".into()));
        store
    }

    fn interactor(
        store: &Arc<InMemoryUserDataAccess>,
        presenter: MockChangePasswordOutputBoundary,
    ) -> ChangePasswordInteractor {
        ChangePasswordInteractor::new(
            store.clone(),
            Arc::new(presenter),
            Arc::new(CommonUserFactory),
            PasswordPolicy::default(),
        )
    }

    fn input(username: &str, password: &str) -> ChangePasswordInputData {
        ChangePasswordInputData {
            username: username.into(),
            password: password.into(),
        }
    }

    #[rstest]
    fn valid_password_is_stored(store: Arc<InMemoryUserDataAccess>) {
        let mut presenter = MockChangePasswordOutputBoundary::new();
        presenter
            .expect_prepare_success_view()
            .withf(|out| out.username() == Some("Paul"))
            .times(1)
            .return_const(());
        presenter.expect_prepare_fail_view().never();

        interactor(&store, presenter).execute(input("Paul", "hunter2"));

        assert_eq!(store.get("Paul"), Some(User::new("Paul", "hunter2")));
    }

    #[rstest]
    #[case::empty(input("Paul", ""), "New password cannot be empty.")]
    #[case::unknown(input("Ada", "hunter2"), "Ada: Account does not exist.")]
    fn invalid_request_fails_and_keeps_old_password(
        store: Arc<InMemoryUserDataAccess>,
        #[case] request: ChangePasswordInputData,
        #[case] message: &'static str,
    ) {
        let mut presenter = MockChangePasswordOutputBoundary::new();
        presenter.expect_prepare_success_view().never();
        presenter
            .expect_prepare_fail_view()
            .withf(move |e| e == message)
            .times(1)
            .return_const(());

        interactor(&store, presenter).execute(request);

        assert_eq!(store.get("Paul"), Some(User::new("Paul", "password")));
        assert!(!LoginUserDataAccess::exists_by_name(&*store, "Ada"));
    }

    #[rstest]
    fn policy_min_length_is_enforced(store: Arc<InMemoryUserDataAccess>) {
        let mut presenter = MockChangePasswordOutputBoundary::new();
        presenter.expect_prepare_success_view().never();
        presenter
            .expect_prepare_fail_view()
            .withf(|e| e == "Password must be at least 8 characters.")
            .times(1)
            .return_const(());

        let interactor = ChangePasswordInteractor::new(
            store.clone(),
            Arc::new(presenter),
            Arc::new(CommonUserFactory),
            PasswordPolicy::new(8),
        );
        interactor.execute(input("Paul", "short"));

        assert_eq!(store.get("Paul"), Some(User::new("Paul", "password")));
    }

    #[rstest]
    fn repeated_failure_reports_same_message(store: Arc<InMemoryUserDataAccess>) {
        let mut presenter = MockChangePasswordOutputBoundary::new();
        presenter.expect_prepare_success_view().never();
        presenter
            .expect_prepare_fail_view()
            .withf(|e| e == "New password cannot be empty.")
            .times(2)
            .return_const(());

        let interactor = interactor(&store, presenter);
        interactor.execute(input("Paul", ""));
        interactor.execute(input("Paul", ""));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Paul"), Some(User::new("Paul", "password")));
    }
}
