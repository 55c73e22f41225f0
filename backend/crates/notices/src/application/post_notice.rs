//! Post Notice Use Case

use std::sync::Arc;

use kernel::actor::Actor;

use crate::domain::entities::Notice;
use crate::domain::repository::NoticeRepository;
use crate::domain::value_objects::{NoticeContent, NoticeTitle};
use crate::error::{NoticeError, NoticeResult};

/// Post notice input
pub struct PostNoticeInput {
    pub title: String,
    pub content: String,
    pub important: bool,
}

/// Post notice use case
pub struct PostNoticeUseCase<N>
where
    N: NoticeRepository,
{
    notice_repo: Arc<N>,
}

impl<N> PostNoticeUseCase<N>
where
    N: NoticeRepository,
{
    pub fn new(notice_repo: Arc<N>) -> Self {
        Self { notice_repo }
    }

    pub async fn execute(&self, actor: &Actor, input: PostNoticeInput) -> NoticeResult<Notice> {
        if !actor.role.can_create_notice() {
            return Err(NoticeError::Forbidden);
        }

        let title = NoticeTitle::new(&input.title)?;
        let content = NoticeContent::new(&input.content)?;

        // Author name is snapshotted from the authenticated actor
        let notice = Notice::new(
            title,
            content,
            input.important,
            actor.user_id,
            actor.name.clone(),
        );

        self.notice_repo.create(&notice).await?;

        tracing::info!(
            notice_id = %notice.notice_id,
            author_id = %actor.user_id,
            important = notice.important,
            "Notice posted"
        );

        Ok(notice)
    }
}
