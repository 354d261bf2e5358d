//! Domain entities. Plain records for the account core.

use serde::{Deserialize, Serialize};

/// A registered account. Owned by the data-access store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    password: String,
}

impl User {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Creates users from raw credentials.
///
/// Interactors depend on this seam instead of calling `User::new`, so an
/// alternative entity construction can be swapped in at the composition root.
pub trait UserFactory: Send + Sync {
    fn create(&self, name: &str, password: &str) -> User;
}

/// Default factory: stores the credentials as given.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonUserFactory;

impl UserFactory for CommonUserFactory {
    fn create(&self, name: &str, password: &str) -> User {
        User::new(name, password)
    }
}
