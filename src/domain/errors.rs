//! Domain errors.
//!
//! `ValidationError` is the expected-failure taxonomy: its `Display` text is
//! the message handed to an output boundary's fail view. `DomainError` covers
//! the outer layers (config, terminal prompts).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username cannot be empty.")]
    EmptyUsername,

    #[error("User already exists.")]
    UserExists,

    #[error("Passwords don't match.")]
    PasswordMismatch,

    #[error("{0}: Account does not exist.")]
    AccountNotFound(String),

    #[error("Incorrect password for \"{0}\".")]
    IncorrectPassword(String),

    #[error("New password cannot be empty.")]
    EmptyPassword,

    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Render failed: {0}")]
    Render(String),
}

impl From<config::ConfigError> for DomainError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
