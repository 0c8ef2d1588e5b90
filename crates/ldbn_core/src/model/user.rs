//! User domain model.

use serde::{Deserialize, Serialize};

/// Store-assigned user identifier (`user.user_id`).
pub type UserId = i64;

/// Identity and role record for one application user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Inactive users are hidden from `select_active_users`.
    pub active: bool,
    pub admin: bool,
    /// Super user flag (`is_su`).
    pub su: bool,
}

impl User {
    /// Creates an active, non-privileged user with the given identity.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            active: true,
            admin: false,
            su: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::User;

    #[test]
    fn new_user_is_active_and_unprivileged() {
        let user = User::new(7, "Ada", "ada@example.com");
        assert!(user.active);
        assert!(!user.admin);
        assert!(!user.su);
    }
}
