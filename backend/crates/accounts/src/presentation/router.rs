//! Accounts Routers

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::infra::postgres::PgAccountsRepository;
use crate::presentation::handlers::{self, AccountsAppState};
use crate::presentation::middleware::{AccountsMiddlewareState, require_actor};

/// Create the auth router (public) with PostgreSQL repository
pub fn auth_router(repo: PgAccountsRepository, config: AccountsConfig) -> Router {
    let state = AccountsAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/login", post(handlers::log_in::<PgAccountsRepository>))
        .with_state(state)
}

/// Create the user management router with PostgreSQL repository
///
/// Every route requires a valid bearer token; the handlers additionally
/// require the admin role.
pub fn users_router(repo: PgAccountsRepository, config: AccountsConfig) -> Router {
    let repo = Arc::new(repo);
    let config = Arc::new(config);

    let state = AccountsAppState {
        repo: repo.clone(),
        config: config.clone(),
    };
    let mw_state = AccountsMiddlewareState { repo, config };

    Router::new()
        .route(
            "/",
            get(handlers::list_users::<PgAccountsRepository>)
                .post(handlers::create_user::<PgAccountsRepository>),
        )
        .route(
            "/{id}/role",
            put(handlers::update_user_role::<PgAccountsRepository>),
        )
        .route(
            "/{id}",
            axum::routing::delete(handlers::delete_user::<PgAccountsRepository>),
        )
        .route_layer(middleware::from_fn_with_state(
            mw_state,
            require_actor::<PgAccountsRepository>,
        ))
        .with_state(state)
}
