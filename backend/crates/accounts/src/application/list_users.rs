//! List Users Use Case

use std::sync::Arc;

use crate::domain::entity::user_account::UserAccount;
use crate::domain::repository::UserRepository;
use crate::error::AccountsResult;

/// List users use case
pub struct ListUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ListUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self) -> AccountsResult<Vec<UserAccount>> {
        self.user_repo.list().await
    }
}
