//! HTTP Handlers
//!
//! Listing is public. Posting and deleting require an [`Actor`]
//! extension, inserted by the accounts authentication middleware that
//! the application layers onto this router.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use kernel::actor::Actor;

use crate::application::{
    DeleteNoticeUseCase, ListNoticesInput, ListNoticesUseCase, PostNoticeInput, PostNoticeUseCase,
};
use crate::domain::repository::NoticeRepository;
use crate::error::{NoticeError, NoticeResult};
use crate::presentation::dto::{
    CreateNoticeRequest, ListNoticesQuery, MessageResponse, NoticeResponse,
};

/// Shared state for notice handlers
#[derive(Clone)]
pub struct NoticeAppState<R>
where
    R: NoticeRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /notices
pub async fn list_notices<R>(
    State(state): State<NoticeAppState<R>>,
    Query(query): Query<ListNoticesQuery>,
) -> NoticeResult<Json<Vec<NoticeResponse>>>
where
    R: NoticeRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListNoticesUseCase::new(state.repo.clone());

    let notices = use_case
        .execute(ListNoticesInput {
            start_date: query.start_date,
            end_date: query.end_date,
            important_only: query.important_only.unwrap_or(false),
        })
        .await?;

    Ok(Json(notices.iter().map(NoticeResponse::from).collect()))
}

/// POST /notices
pub async fn post_notice<R>(
    State(state): State<NoticeAppState<R>>,
    actor: Option<Extension<Actor>>,
    Json(req): Json<CreateNoticeRequest>,
) -> NoticeResult<impl IntoResponse>
where
    R: NoticeRepository + Clone + Send + Sync + 'static,
{
    let Extension(actor) = actor.ok_or(NoticeError::Unauthenticated)?;

    let use_case = PostNoticeUseCase::new(state.repo.clone());

    let notice = use_case
        .execute(
            &actor,
            PostNoticeInput {
                title: req.title,
                content: req.content,
                important: req.important,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(NoticeResponse::from(&notice))))
}

/// DELETE /notices/{id}
pub async fn delete_notice<R>(
    State(state): State<NoticeAppState<R>>,
    actor: Option<Extension<Actor>>,
    Path(notice_id): Path<Uuid>,
) -> NoticeResult<Json<MessageResponse>>
where
    R: NoticeRepository + Clone + Send + Sync + 'static,
{
    let Extension(actor) = actor.ok_or(NoticeError::Unauthenticated)?;

    let use_case = DeleteNoticeUseCase::new(state.repo.clone());
    use_case.execute(&actor, notice_id).await?;

    Ok(Json(MessageResponse {
        message: "Notice deleted successfully".to_string(),
    }))
}
