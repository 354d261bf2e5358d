//! Inbound ports. Controllers call into the use cases through these.
//!
//! `execute` returns nothing: every outcome is reported through the matching
//! output boundary.

use crate::domain::DomainError;

/// Raw sign-up request as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupInputData {
    pub username: String,
    pub password: String,
    pub repeat_password: String,
}

/// Raw login request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInputData {
    pub username: String,
    pub password: String,
}

/// Change-password request: the account and its new password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePasswordInputData {
    pub username: String,
    pub password: String,
}

pub trait SignupInputBoundary: Send + Sync {
    /// Register a new account and make it the current session user.
    fn execute(&self, input: SignupInputData);

    /// Navigate from the sign-up screen to the login screen.
    fn switch_to_login_view(&self);
}

pub trait LoginInputBoundary: Send + Sync {
    /// Check credentials and, on success, make the user the current session user.
    fn execute(&self, input: LoginInputData);

    /// Navigate from the login screen to the sign-up screen.
    fn switch_to_signup_view(&self);
}

pub trait LogoutInputBoundary: Send + Sync {
    /// End the current session. After this returns there is no logged-in user.
    fn execute(&self);
}

pub trait ChangePasswordInputBoundary: Send + Sync {
    fn execute(&self, input: ChangePasswordInputData);
}

/// Input port: the terminal front end drives the application until the user exits.
pub trait InputPort: Send + Sync {
    fn run(&self) -> Result<(), DomainError>;
}
