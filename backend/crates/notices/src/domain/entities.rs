//! Domain Entities
//!
//! Core business entities for the notice board domain.

use chrono::{DateTime, Utc};
use kernel::id::{NoticeId, UserId};

use crate::domain::value_objects::{NoticeContent, NoticeTitle};

/// Notice entity - a posting on the school notice board
///
/// Notices are immutable once posted; there is no edit operation.
/// `author_name` is a snapshot taken at posting time, so the name on a
/// notice survives later renames or deletion of the author's account.
#[derive(Debug, Clone)]
pub struct Notice {
    pub notice_id: NoticeId,
    pub title: NoticeTitle,
    pub content: NoticeContent,
    pub important: bool,
    pub author_id: UserId,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    /// Create a new notice with a fresh ID and timestamp
    pub fn new(
        title: NoticeTitle,
        content: NoticeContent,
        important: bool,
        author_id: UserId,
        author_name: String,
    ) -> Self {
        Self {
            notice_id: NoticeId::new(),
            title,
            content,
            important,
            author_id,
            author_name,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notice_snapshots_author() {
        let author_id = UserId::new();
        let notice = Notice::new(
            NoticeTitle::new("Sports Day").unwrap(),
            NoticeContent::new("The annual sports day is on June 3rd.").unwrap(),
            true,
            author_id,
            "Ms. Smith".to_string(),
        );

        assert_eq!(notice.author_id, author_id);
        assert_eq!(notice.author_name, "Ms. Smith");
        assert!(notice.important);
    }
}
