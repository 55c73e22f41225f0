//! Actor - authenticated request context
//!
//! Resolved from the bearer token on every request and inserted into
//! request extensions by the accounts middleware. The role is re-read
//! from the database during authentication; nothing here is cached
//! across requests.

use crate::id::UserId;
use crate::role::Role;

/// The authenticated principal performing a request
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: UserId,
    /// Display name, snapshotted onto notices at creation
    pub name: String,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: UserId, name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            name: name.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;

    #[test]
    fn test_actor_carries_role() {
        let actor = Actor::new(Id::new(), "Teacher Smith", Role::Teacher);
        assert!(actor.role.can_create_notice());
        assert!(!actor.role.can_manage_users());
    }
}
