//! Log In Use Case
//!
//! Authenticates a user by email and password and issues an access
//! token. Every failure path reports the same `InvalidCredentials`
//! error so callers cannot probe which emails are registered.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AccountsConfig;
use crate::application::token::{self, TokenClaims};
use crate::domain::entity::user_account::UserAccount;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountsError, AccountsResult};

/// Log in input
pub struct LogInInput {
    pub email: String,
    pub password: String,
}

/// Log in output
#[derive(Debug)]
pub struct LogInOutput {
    pub account: UserAccount,
    pub token: String,
}

/// Log in use case
pub struct LogInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountsConfig>,
}

impl<U> LogInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountsConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LogInInput) -> AccountsResult<LogInOutput> {
        let email =
            Email::new(&input.email).map_err(|_| AccountsError::InvalidCredentials)?;

        let account = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountsError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AccountsError::InvalidCredentials)?;

        if !account.password_hash.verify(&password, self.config.pepper()) {
            return Err(AccountsError::InvalidCredentials);
        }

        let claims = TokenClaims::new(
            account.user_id.into_uuid(),
            account.role,
            self.config.token_ttl_ms(),
        );
        let token = token::issue(&claims, &self.config.token_secret)?;

        tracing::info!(
            user_id = %account.user_id,
            role = %account.role,
            "User logged in"
        );

        Ok(LogInOutput { account, token })
    }
}
