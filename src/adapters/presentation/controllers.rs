//! Controllers. Thin adapters from UI events to input boundaries.

use crate::ports::{
    ChangePasswordInputBoundary, ChangePasswordInputData, LoginInputBoundary, LoginInputData,
    LogoutInputBoundary, SignupInputBoundary, SignupInputData,
};
use std::sync::Arc;

pub struct SignupController {
    interactor: Arc<dyn SignupInputBoundary>,
}

impl SignupController {
    pub fn new(interactor: Arc<dyn SignupInputBoundary>) -> Self {
        Self { interactor }
    }

    pub fn execute(&self, username: &str, password: &str, repeat_password: &str) {
        self.interactor.execute(SignupInputData {
            username: username.to_owned(),
            password: password.to_owned(),
            repeat_password: repeat_password.to_owned(),
        });
    }

    pub fn switch_to_login_view(&self) {
        self.interactor.switch_to_login_view();
    }
}

pub struct LoginController {
    interactor: Arc<dyn LoginInputBoundary>,
}

impl LoginController {
    pub fn new(interactor: Arc<dyn LoginInputBoundary>) -> Self {
        Self { interactor }
    }

    pub fn execute(&self, username: &str, password: &str) {
        self.interactor.execute(LoginInputData {
            username: username.to_owned(),
            password: password.to_owned(),
        });
    }

    pub fn switch_to_signup_view(&self) {
        self.interactor.switch_to_signup_view();
    }
}

pub struct LogoutController {
    interactor: Arc<dyn LogoutInputBoundary>,
}

impl LogoutController {
    pub fn new(interactor: Arc<dyn LogoutInputBoundary>) -> Self {
        Self { interactor }
    }

    pub fn execute(&self) {
        self.interactor.execute();
    }
}

pub struct ChangePasswordController {
    interactor: Arc<dyn ChangePasswordInputBoundary>,
}

impl ChangePasswordController {
    pub fn new(interactor: Arc<dyn ChangePasswordInputBoundary>) -> Self {
        Self { interactor }
    }

    pub fn execute(&self, username: &str, password: &str) {
        self.interactor.execute(ChangePasswordInputData {
            username: username.to_owned(),
            password: password.to_owned(),
        });
    }
}
