//! Outbound ports. Use cases call into data access and presenters.
//!
//! Data access is split per use case so each interactor sees only the
//! operations it needs. Implemented by adapters.

use crate::domain::User;

// ─────────────────────────────────────────────────────────────────────────────
// Data access
// ─────────────────────────────────────────────────────────────────────────────

pub trait SignupUserDataAccess: Send + Sync {
    fn exists_by_name(&self, username: &str) -> bool;

    fn save(&self, user: User);

    fn set_current_username(&self, username: Option<String>);
}

pub trait LoginUserDataAccess: Send + Sync {
    fn exists_by_name(&self, username: &str) -> bool;

    /// Returns `None` if no user has that name.
    fn get(&self, username: &str) -> Option<User>;

    fn set_current_username(&self, username: Option<String>);
}

pub trait LogoutUserDataAccess: Send + Sync {
    /// `None` means nobody is logged in.
    fn get_current_username(&self) -> Option<String>;

    fn set_current_username(&self, username: Option<String>);
}

pub trait ChangePasswordUserDataAccess: Send + Sync {
    fn exists_by_name(&self, username: &str) -> bool;

    /// Replace the stored record for `user.name()` with `user`.
    fn change_password(&self, user: User);
}

// ─────────────────────────────────────────────────────────────────────────────
// Output data
// ─────────────────────────────────────────────────────────────────────────────

/// Result of a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutputData {
    username: Option<String>,
}

impl SignupOutputData {
    pub fn new(username: Option<String>) -> Self {
        Self { username }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutputData {
    username: Option<String>,
}

impl LoginOutputData {
    pub fn new(username: Option<String>) -> Self {
        Self { username }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

/// Result of a logout. Carries the user who was logged in, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutOutputData {
    username: Option<String>,
}

impl LogoutOutputData {
    pub fn new(username: Option<String>) -> Self {
        Self { username }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

/// Result of a successful password change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePasswordOutputData {
    username: Option<String>,
}

impl ChangePasswordOutputData {
    pub fn new(username: Option<String>) -> Self {
        Self { username }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Output boundaries
// ─────────────────────────────────────────────────────────────────────────────

#[cfg_attr(test, mockall::automock)]
pub trait SignupOutputBoundary: Send + Sync {
    fn prepare_success_view(&self, output: SignupOutputData);

    fn prepare_fail_view(&self, error: String);

    fn switch_to_login_view(&self);
}

#[cfg_attr(test, mockall::automock)]
pub trait LoginOutputBoundary: Send + Sync {
    fn prepare_success_view(&self, output: LoginOutputData);

    fn prepare_fail_view(&self, error: String);

    fn switch_to_signup_view(&self);
}

/// Logout has no failure path.
#[cfg_attr(test, mockall::automock)]
pub trait LogoutOutputBoundary: Send + Sync {
    fn prepare_success_view(&self, output: LogoutOutputData);
}

#[cfg_attr(test, mockall::automock)]
pub trait ChangePasswordOutputBoundary: Send + Sync {
    fn prepare_success_view(&self, output: ChangePasswordOutputData);

    fn prepare_fail_view(&self, error: String);
}
