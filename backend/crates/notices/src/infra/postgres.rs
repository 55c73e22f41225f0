//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{NoticeId, UserId};
use sqlx::PgPool;

use crate::domain::entities::Notice;
use crate::domain::repository::{NoticeFilter, NoticeRepository};
use crate::domain::value_objects::{NoticeContent, NoticeTitle};
use crate::error::NoticeResult;

/// PostgreSQL-backed notice repository
#[derive(Clone)]
pub struct PgNoticeRepository {
    pool: PgPool,
}

impl PgNoticeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl NoticeRepository for PgNoticeRepository {
    async fn create(&self, notice: &Notice) -> NoticeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notices (
                notice_id,
                title,
                content,
                important,
                author_id,
                author_name,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(notice.notice_id.as_uuid())
        .bind(notice.title.as_str())
        .bind(notice.content.as_str())
        .bind(notice.important)
        .bind(notice.author_id.as_uuid())
        .bind(&notice.author_name)
        .bind(notice.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, notice_id: &NoticeId) -> NoticeResult<Option<Notice>> {
        let row = sqlx::query_as::<_, NoticeRow>(
            r#"
            SELECT notice_id, title, content, important, author_id, author_name, created_at
            FROM notices
            WHERE notice_id = $1
            "#,
        )
        .bind(notice_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_notice()))
    }

    async fn list(&self, filter: &NoticeFilter) -> NoticeResult<Vec<Notice>> {
        let rows = sqlx::query_as::<_, NoticeRow>(
            r#"
            SELECT notice_id, title, content, important, author_id, author_name, created_at
            FROM notices
            WHERE ($1::timestamptz IS NULL OR created_at >= $1)
              AND ($2::timestamptz IS NULL OR created_at <= $2)
              AND (NOT $3 OR important)
            ORDER BY created_at DESC
            "#,
        )
        .bind(filter.since)
        .bind(filter.until)
        .bind(filter.important_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_notice()).collect())
    }

    async fn delete(&self, notice_id: &NoticeId) -> NoticeResult<u64> {
        let rows = sqlx::query("DELETE FROM notices WHERE notice_id = $1")
            .bind(notice_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct NoticeRow {
    notice_id: uuid::Uuid,
    title: String,
    content: String,
    important: bool,
    author_id: uuid::Uuid,
    author_name: String,
    created_at: DateTime<Utc>,
}

impl NoticeRow {
    fn into_notice(self) -> Notice {
        Notice {
            notice_id: NoticeId::from_uuid(self.notice_id),
            title: NoticeTitle::from_db(self.title),
            content: NoticeContent::from_db(self.content),
            important: self.important,
            author_id: UserId::from_uuid(self.author_id),
            author_name: self.author_name,
            created_at: self.created_at,
        }
    }
}
