//! Wire Models
//!
//! Client-side views of the server's JSON contract. Field names are
//! camelCase on the wire.

use chrono::{DateTime, Utc};
use kernel::role::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The logged-in user together with the bearer token
///
/// This is exactly what POST /auth/login returns and what gets
/// persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

/// A user as listed for admins
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// A notice as listed on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub important: bool,
    pub author_id: Uuid,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

/// New user payload for POST /users
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// New notice payload for POST /notices
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotice {
    pub title: String,
    pub content: String,
    pub important: bool,
}

/// Filters for GET /notices
#[derive(Debug, Clone, Default)]
pub struct NoticeQuery {
    /// Inclusive start day, YYYY-MM-DD
    pub start_date: Option<chrono::NaiveDate>,
    /// Inclusive end day, YYYY-MM-DD
    pub end_date: Option<chrono::NaiveDate>,
    pub important_only: bool,
}
