//! Per-screen display state.

use super::view_model::{ScreenState, ViewModel};

pub const SIGNUP_VIEW: &str = "sign up";
pub const LOGIN_VIEW: &str = "log in";
pub const LOGGED_IN_VIEW: &str = "logged in";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupState {
    pub username: String,
    pub password: String,
    pub repeat_password: String,
    pub error: Option<String>,
}

impl ScreenState for SignupState {
    const VIEW_NAME: &'static str = SIGNUP_VIEW;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
}

impl ScreenState for LoginState {
    const VIEW_NAME: &'static str = LOGIN_VIEW;
}

/// Shown while a user is logged in. `password` is the change-password field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggedInState {
    pub username: String,
    pub password: String,
    pub password_error: Option<String>,
}

impl ScreenState for LoggedInState {
    const VIEW_NAME: &'static str = LOGGED_IN_VIEW;
}

pub type SignupViewModel = ViewModel<SignupState>;
pub type LoginViewModel = ViewModel<LoginState>;
pub type LoggedInViewModel = ViewModel<LoggedInState>;
