//! Password rules shared by sign-up and change-password.

use crate::domain::ValidationError;

/// Minimum length a new password must have. Length is counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    /// A `min_length` of 0 is raised to 1: empty passwords are never accepted.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length: min_length.max(1),
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn check(&self, password: &str) -> Result<(), ValidationError> {
        let len = password.chars().count();
        if len == 0 {
            return Err(ValidationError::EmptyPassword);
        }
        if len < self.min_length {
            return Err(ValidationError::PasswordTooShort {
                min: self.min_length,
            });
        }
        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}
