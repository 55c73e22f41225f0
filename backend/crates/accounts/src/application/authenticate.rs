//! Authenticate Use Case
//!
//! Resolves a bearer token into an [`Actor`]. The account is re-read
//! from the database so role changes and deletions take effect on the
//! very next request, regardless of what the token claims.

use std::sync::Arc;

use kernel::actor::Actor;
use kernel::id::UserId;

use crate::application::config::AccountsConfig;
use crate::application::token;
use crate::domain::repository::UserRepository;
use crate::error::{AccountsError, AccountsResult};

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountsConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountsConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, token: &str) -> AccountsResult<Actor> {
        let claims = token::parse(token, &self.config.token_secret)?;

        let account = self
            .user_repo
            .find_by_id(&UserId::from_uuid(claims.sub))
            .await?
            .ok_or(AccountsError::TokenInvalid)?;

        Ok(Actor::new(
            account.user_id,
            account.name.as_str(),
            account.role,
        ))
    }
}
