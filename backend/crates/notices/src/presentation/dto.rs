//! Request/Response DTOs
//!
//! Wire types for the JSON API. All field names are camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Notice;

/// A notice as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub important: bool,
    pub author_id: Uuid,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Notice> for NoticeResponse {
    fn from(notice: &Notice) -> Self {
        Self {
            id: notice.notice_id.into_uuid(),
            title: notice.title.as_str().to_string(),
            content: notice.content.as_str().to_string(),
            important: notice.important,
            author_id: notice.author_id.into_uuid(),
            author_name: notice.author_name.clone(),
            created_at: notice.created_at,
        }
    }
}

/// POST /notices request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoticeRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub important: bool,
}

/// GET /notices query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNoticesQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub important_only: Option<bool>,
}

/// Generic confirmation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}
