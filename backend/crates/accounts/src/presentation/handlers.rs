//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, response::IntoResponse};
use std::sync::Arc;
use uuid::Uuid;

use kernel::actor::Actor;

use crate::application::config::AccountsConfig;
use crate::application::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, ListUsersUseCase, LogInInput,
    LogInUseCase, UpdateUserRoleUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{AccountsError, AccountsResult};
use crate::presentation::dto::{
    CreateUserRequest, LoginRequest, LoginResponse, MessageResponse, UpdateRoleRequest,
    UserResponse,
};

/// Shared state for accounts handlers
#[derive(Clone)]
pub struct AccountsAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountsConfig>,
}

// ============================================================================
// Log In
// ============================================================================

/// POST /auth/login
pub async fn log_in<R>(
    State(state): State<AccountsAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AccountsResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LogInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        id: output.account.user_id.into_uuid(),
        name: output.account.name.as_str().to_string(),
        email: output.account.email.as_str().to_string(),
        role: output.account.role,
        token: output.token,
    }))
}

// ============================================================================
// User Management (admin only)
// ============================================================================

fn require_admin(actor: &Actor) -> AccountsResult<()> {
    if !actor.role.can_manage_users() {
        return Err(AccountsError::Forbidden);
    }
    Ok(())
}

/// GET /users
pub async fn list_users<R>(
    State(state): State<AccountsAppState<R>>,
    Extension(actor): Extension<Actor>,
) -> AccountsResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    require_admin(&actor)?;

    let accounts = ListUsersUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(accounts.iter().map(UserResponse::from).collect()))
}

/// POST /users
pub async fn create_user<R>(
    State(state): State<AccountsAppState<R>>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<CreateUserRequest>,
) -> AccountsResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    require_admin(&actor)?;

    let use_case = CreateUserUseCase::new(state.repo.clone(), state.config.clone());

    let account = use_case
        .execute(CreateUserInput {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&account))))
}

/// PUT /users/{id}/role
pub async fn update_user_role<R>(
    State(state): State<AccountsAppState<R>>,
    Extension(actor): Extension<Actor>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdateRoleRequest>,
) -> AccountsResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    require_admin(&actor)?;

    let use_case = UpdateUserRoleUseCase::new(state.repo.clone(), state.config.clone());
    let account = use_case.execute(user_id, req.role).await?;

    Ok(Json(UserResponse::from(&account)))
}

/// DELETE /users/{id}
pub async fn delete_user<R>(
    State(state): State<AccountsAppState<R>>,
    Extension(actor): Extension<Actor>,
    Path(user_id): Path<Uuid>,
) -> AccountsResult<Json<MessageResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    require_admin(&actor)?;

    let use_case = DeleteUserUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(&actor, user_id).await?;

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
