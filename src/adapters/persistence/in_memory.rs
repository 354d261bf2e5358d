//! Implements every data-access port over an in-process map.
//!
//! Holds the registered users and the single current-session field.
//! Nothing outlives the process.

use crate::domain::User;
use crate::ports::{
    ChangePasswordUserDataAccess, LoginUserDataAccess, LogoutUserDataAccess,
    SignupUserDataAccess,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// In-memory user store. Share via `Arc` and hand out as any of the port traits.
#[derive(Debug, Default)]
pub struct InMemoryUserDataAccess {
    users: RwLock<HashMap<String, User>>,
    /// `None` ⇔ logged out.
    current_username: RwLock<Option<String>>,
}

impl InMemoryUserDataAccess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    fn exists(&self, username: &str) -> bool {
        self.users.read().contains_key(username)
    }

    fn put(&self, user: User) {
        debug!(username = user.name(), "storing user");
        self.users.write().insert(user.name().to_owned(), user);
    }

    fn find(&self, username: &str) -> Option<User> {
        self.users.read().get(username).cloned()
    }

    fn current(&self) -> Option<String> {
        self.current_username.read().clone()
    }

    fn set_current(&self, username: Option<String>) {
        debug!(username = ?username, "session user changed");
        *self.current_username.write() = username;
    }
}

impl SignupUserDataAccess for InMemoryUserDataAccess {
    fn exists_by_name(&self, username: &str) -> bool {
        self.exists(username)
    }

    fn save(&self, user: User) {
        self.put(user);
    }

    fn set_current_username(&self, username: Option<String>) {
        self.set_current(username);
    }
}

impl LoginUserDataAccess for InMemoryUserDataAccess {
    fn exists_by_name(&self, username: &str) -> bool {
        self.exists(username)
    }

    fn get(&self, username: &str) -> Option<User> {
        self.find(username)
    }

    fn set_current_username(&self, username: Option<String>) {
        self.set_current(username);
    }
}

impl LogoutUserDataAccess for InMemoryUserDataAccess {
    fn get_current_username(&self) -> Option<String> {
        self.current()
    }

    fn set_current_username(&self, username: Option<String>) {
        self.set_current(username);
    }
}

impl ChangePasswordUserDataAccess for InMemoryUserDataAccess {
    fn exists_by_name(&self, username: &str) -> bool {
        self.exists(username)
    }

    fn change_password(&self, user: User) {
        self.put(user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_get_returns_user() {
        let store = InMemoryUserDataAccess::new();
        SignupUserDataAccess::save(&store, User::new("Paul", "password"));

        assert!(SignupUserDataAccess::exists_by_name(&store, "Paul"));
        assert_eq!(store.get("Paul"), Some(User::new("Paul", "password")));
        assert_eq!(store.get("paul"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn change_password_replaces_record() {
        let store = InMemoryUserDataAccess::new();
        SignupUserDataAccess::save(&store, User::new("Paul", "old"));
        store.change_password(User::new("Paul", "new"));

        assert_eq!(store.get("Paul").map(|u| u.password().to_owned()), Some("new".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn session_starts_logged_out() {
        let store = InMemoryUserDataAccess::new();

        assert!(store.is_empty());
        assert_eq!(store.get_current_username(), None);
    }

    #[test]
    fn session_field_is_shared_across_ports() {
        let store = InMemoryUserDataAccess::new();
        LoginUserDataAccess::set_current_username(&store, Some("Paul".into()));
        assert_eq!(store.get_current_username(), Some("Paul".into()));

        LogoutUserDataAccess::set_current_username(&store, None);
        assert_eq!(store.get_current_username(), None);
    }
}
