//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::NoticeId;

use crate::domain::entities::Notice;
use crate::error::NoticeResult;

/// Listing filter; all bounds are inclusive
#[derive(Debug, Clone, Copy, Default)]
pub struct NoticeFilter {
    /// Lower bound on `created_at`
    pub since: Option<DateTime<Utc>>,
    /// Upper bound on `created_at`
    pub until: Option<DateTime<Utc>>,
    /// Keep only notices flagged important
    pub important_only: bool,
}

/// Notice repository trait
#[trait_variant::make(NoticeRepository: Send)]
pub trait LocalNoticeRepository {
    /// Persist a new notice
    async fn create(&self, notice: &Notice) -> NoticeResult<()>;

    /// Find a notice by ID
    async fn find_by_id(&self, notice_id: &NoticeId) -> NoticeResult<Option<Notice>>;

    /// List notices matching the filter, newest first
    async fn list(&self, filter: &NoticeFilter) -> NoticeResult<Vec<Notice>>;

    /// Delete a notice, returning the number of rows removed
    async fn delete(&self, notice_id: &NoticeId) -> NoticeResult<u64>;
}
