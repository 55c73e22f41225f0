//! Delete Notice Use Case

use std::sync::Arc;

use kernel::actor::Actor;
use uuid::Uuid;

use crate::domain::policy;
use crate::domain::repository::NoticeRepository;
use crate::error::{NoticeError, NoticeResult};

/// Delete notice use case
pub struct DeleteNoticeUseCase<N>
where
    N: NoticeRepository,
{
    notice_repo: Arc<N>,
}

impl<N> DeleteNoticeUseCase<N>
where
    N: NoticeRepository,
{
    pub fn new(notice_repo: Arc<N>) -> Self {
        Self { notice_repo }
    }

    pub async fn execute(&self, actor: &Actor, notice_id: Uuid) -> NoticeResult<()> {
        let notice = self
            .notice_repo
            .find_by_id(&notice_id.into())
            .await?
            .ok_or(NoticeError::NoticeNotFound)?;

        if !policy::can_delete(actor, &notice) {
            return Err(NoticeError::Forbidden);
        }

        // A concurrent delete may win the race; report it as gone
        let rows = self.notice_repo.delete(&notice.notice_id).await?;
        if rows == 0 {
            return Err(NoticeError::NoticeNotFound);
        }

        tracing::info!(
            notice_id = %notice.notice_id,
            deleted_by = %actor.user_id,
            "Notice deleted"
        );

        Ok(())
    }
}
