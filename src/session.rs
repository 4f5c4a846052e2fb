//! Session
//!
//! The current user lives under one store key and is consumed, never
//! validated: [`require_user`] is a presence-only gate, and the `Admin` role
//! check only drives visibility of admin controls. Neither is a security
//! boundary.

use serde::{Deserialize, Serialize};

use crate::store::Store;

/// Store key under which the current session user is persisted.
pub const USER_KEY: &str = "user";

/// Role string that unlocks the admin stock controls.
pub const ADMIN_ROLE: &str = "Admin";

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Role string; only `Admin` is meaningful.
    pub role: String,
}

impl User {
    /// Whether this user's role is exactly [`ADMIN_ROLE`].
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Reads the current user from the store, if one is signed in.
#[must_use]
pub fn current_user(store: &Store) -> Option<User> {
    store.get(USER_KEY)
}

/// Presence-only gate: whether any user object is in the store.
#[must_use]
pub fn require_user(store: &Store) -> bool {
    current_user(store).is_some()
}

/// Persists `user` as the current session user.
pub fn sign_in(store: &Store, user: &User) -> bool {
    store.set(USER_KEY, user)
}

/// Removes the current session user.
pub fn sign_out(store: &Store) -> bool {
    store.remove(USER_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            name: "Siti".to_owned(),
            role: ADMIN_ROLE.to_owned(),
        }
    }

    #[test]
    fn gate_is_presence_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Store::open(dir.path());

        assert!(!require_user(&store));
        assert!(sign_in(&store, &admin()));
        assert!(require_user(&store));
        assert!(sign_out(&store));
        assert!(!require_user(&store));
    }

    #[test]
    fn current_user_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Store::open(dir.path());

        sign_in(&store, &admin());

        assert_eq!(current_user(&store), Some(admin()));
    }

    #[test]
    fn admin_check_is_exact() {
        let mut user = admin();
        assert!(user.is_admin());

        user.role = "admin".to_owned();
        assert!(!user.is_admin());

        user.role = "Kasir".to_owned();
        assert!(!user.is_admin());
    }
}
