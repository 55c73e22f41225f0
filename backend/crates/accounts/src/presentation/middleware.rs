//! Authentication Middleware
//!
//! Turns `Authorization: Bearer <token>` into an [`Actor`] request
//! extension. Authentication always goes through
//! [`AuthenticateUseCase`], so the account's current role is read from
//! the database on every request.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::bearer::extract_bearer;

use crate::application::AuthenticateUseCase;
use crate::application::config::AccountsConfig;
use crate::domain::repository::UserRepository;
use crate::error::AccountsError;

/// State shared by the authentication middleware
#[derive(Clone)]
pub struct AccountsMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountsConfig>,
}

/// Reject the request unless it carries a valid bearer token
///
/// On success the resolved [`Actor`](kernel::actor::Actor) is inserted
/// into the request extensions.
pub async fn require_actor<R>(
    State(state): State<AccountsMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Some(token) = extract_bearer(req.headers()) else {
        return AccountsError::TokenInvalid.into_response();
    };

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    match use_case.execute(&token).await {
        Ok(actor) => {
            req.extensions_mut().insert(actor);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

/// Resolve an actor if a valid bearer token is present, else continue
///
/// Used on routers that mix public and authenticated routes; handlers
/// that need an actor fail with 401 when the extension is absent.
pub async fn resolve_actor<R>(
    State(state): State<AccountsMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_bearer(req.headers()) {
        let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());
        match use_case.execute(&token).await {
            Ok(actor) => {
                req.extensions_mut().insert(actor);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring invalid bearer token");
            }
        }
    }

    next.run(req).await
}
