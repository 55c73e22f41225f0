//! User Account Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use kernel::role::Role;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_name::UserName};

/// A registered user of the notice board
///
/// The password is only ever held as an Argon2id hash; the clear text
/// never reaches this entity.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user_id: UserId,
    pub name: UserName,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// Create a new account with a fresh ID and timestamps
    pub fn new(name: UserName, email: Email, password_hash: HashedPassword, role: Role) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the account's role
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}
