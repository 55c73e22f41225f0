//! User Role
//!
//! The role vocabulary shared by every domain crate, together with the
//! pure authorization predicates evaluated on each request.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum Role {
    #[default]
    Student = 0,
    Teacher = 1,
    Admin = 2,
}

impl Role {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Wire/database code for the role
    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            Student => "STUDENT",
            Teacher => "TEACHER",
            Admin => "ADMIN",
        }
    }

    /// May this role post notices? (Teacher and Admin)
    #[inline]
    pub const fn can_create_notice(&self) -> bool {
        use Role::*;
        matches!(self, Teacher | Admin)
    }

    /// May this role administer user accounts? (Admin only)
    #[inline]
    pub const fn can_manage_users(&self) -> bool {
        matches!(self, Role::Admin)
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        use Role::*;
        match id {
            0 => Some(Student),
            1 => Some(Teacher),
            2 => Some(Admin),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Role::*;
        match code {
            "STUDENT" => Some(Student),
            "TEACHER" => Some(Teacher),
            "ADMIN" => Some(Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_id() {
        assert_eq!(Role::from_id(0), Some(Role::Student));
        assert_eq!(Role::from_id(1), Some(Role::Teacher));
        assert_eq!(Role::from_id(2), Some(Role::Admin));
        assert_eq!(Role::from_id(3), None);
    }

    #[test]
    fn test_role_from_code() {
        assert_eq!(Role::from_code("STUDENT"), Some(Role::Student));
        assert_eq!(Role::from_code("TEACHER"), Some(Role::Teacher));
        assert_eq!(Role::from_code("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::from_code("admin"), None);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Student.to_string(), "STUDENT");
        assert_eq!(Role::Teacher.to_string(), "TEACHER");
        assert_eq!(Role::Admin.to_string(), "ADMIN");
    }

    #[test]
    fn test_role_serde_codes() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""ADMIN""#);
        let role: Role = serde_json::from_str(r#""TEACHER""#).unwrap();
        assert_eq!(role, Role::Teacher);
    }

    #[test]
    fn test_can_create_notice() {
        assert!(!Role::Student.can_create_notice());
        assert!(Role::Teacher.can_create_notice());
        assert!(Role::Admin.can_create_notice());
    }

    #[test]
    fn test_can_manage_users() {
        assert!(!Role::Student.can_manage_users());
        assert!(!Role::Teacher.can_manage_users());
        assert!(Role::Admin.can_manage_users());
    }
}
