//! Request/Response DTOs
//!
//! Wire types for the JSON API. All field names are camelCase.

use chrono::{DateTime, Utc};
use kernel::role::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user_account::UserAccount;

/// POST /auth/login request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

/// A user as exposed to admins; never includes the password hash
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<&UserAccount> for UserResponse {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.user_id.into_uuid(),
            name: account.name.as_str().to_string(),
            email: account.email.as_str().to_string(),
            role: account.role,
            created_at: account.created_at,
        }
    }
}

/// POST /users request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// PUT /users/{id}/role request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub role: Role,
}

/// Generic confirmation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}
