//! Notices Router

use axum::{
    Router,
    routing::{delete, get},
};
use std::sync::Arc;

use crate::infra::postgres::PgNoticeRepository;
use crate::presentation::handlers::{self, NoticeAppState};

/// Create the notices router with PostgreSQL repository
///
/// The router itself carries no authentication; the application wraps
/// it with the accounts `resolve_actor` middleware so mutating handlers
/// can find an [`Actor`](kernel::actor::Actor) extension.
pub fn notice_router(repo: PgNoticeRepository) -> Router {
    let state = NoticeAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_notices::<PgNoticeRepository>)
                .post(handlers::post_notice::<PgNoticeRepository>),
        )
        .route(
            "/{id}",
            delete(handlers::delete_notice::<PgNoticeRepository>),
        )
        .with_state(state)
}
