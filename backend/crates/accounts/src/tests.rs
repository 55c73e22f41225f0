//! Unit tests for accounts crate
//! Use cases run against an in-memory repository.

use std::sync::{Arc, Mutex};

use kernel::id::UserId;
use kernel::role::Role;
use platform::password::ClearTextPassword;
use uuid::Uuid;

use crate::domain::entity::user_account::UserAccount;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AccountsResult;

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Default)]
struct MemAccountsRepository {
    accounts: Mutex<Vec<UserAccount>>,
    notice_purges: Mutex<Vec<Uuid>>,
}

impl MemAccountsRepository {
    fn with(accounts: Vec<UserAccount>) -> Arc<Self> {
        Arc::new(Self {
            accounts: Mutex::new(accounts),
            notice_purges: Mutex::new(Vec::new()),
        })
    }

    fn purged_authors(&self) -> Vec<Uuid> {
        self.notice_purges.lock().unwrap().clone()
    }

    fn set_role(&self, user_id: &UserId, role: Role) {
        let mut accounts = self.accounts.lock().unwrap();
        for account in accounts.iter_mut() {
            if &account.user_id == user_id {
                account.set_role(role);
            }
        }
    }

    fn remove(&self, user_id: &UserId) {
        self.accounts
            .lock()
            .unwrap()
            .retain(|a| &a.user_id != user_id);
    }
}

impl UserRepository for MemAccountsRepository {
    async fn create(&self, account: &UserAccount) -> AccountsResult<()> {
        self.accounts.lock().unwrap().push(account.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AccountsResult<Option<UserAccount>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.user_id == user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AccountsResult<Option<UserAccount>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AccountsResult<bool> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .any(|a| &a.email == email))
    }

    async fn list(&self) -> AccountsResult<Vec<UserAccount>> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn update(&self, account: &UserAccount) -> AccountsResult<()> {
        let mut accounts = self.accounts.lock().unwrap();
        for slot in accounts.iter_mut() {
            if slot.user_id == account.user_id {
                *slot = account.clone();
            }
        }
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> AccountsResult<u64> {
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| &a.user_id != user_id);
        Ok((before - accounts.len()) as u64)
    }

    async fn count_admins(&self) -> AccountsResult<i64> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.role == Role::Admin)
            .count() as i64)
    }

    async fn delete_notices_authored_by(&self, user_id: &UserId) -> AccountsResult<u64> {
        self.notice_purges
            .lock()
            .unwrap()
            .push(user_id.into_uuid());
        Ok(1)
    }
}

fn account(name: &str, email: &str, password: &str, role: Role) -> UserAccount {
    let clear = ClearTextPassword::new(password.to_string()).unwrap();
    UserAccount::new(
        UserName::new(name).unwrap(),
        Email::new(email).unwrap(),
        clear.hash(None).unwrap(),
        role,
    )
}

fn actor_for(account: &UserAccount) -> kernel::actor::Actor {
    kernel::actor::Actor::new(account.user_id, account.name.as_str(), account.role)
}

// ============================================================================
// Login
// ============================================================================

mod login_tests {
    use super::*;
    use crate::application::config::AccountsConfig;
    use crate::application::{LogInInput, LogInUseCase};
    use crate::error::AccountsError;

    fn use_case(repo: Arc<MemAccountsRepository>) -> LogInUseCase<MemAccountsRepository> {
        LogInUseCase::new(repo, Arc::new(AccountsConfig::with_random_secret()))
    }

    #[tokio::test]
    async fn test_login_issues_token() {
        let admin = account("Admin User", "admin@example.com", "admin-pass-1", Role::Admin);
        let repo = MemAccountsRepository::with(vec![admin.clone()]);

        let output = use_case(repo)
            .execute(LogInInput {
                email: "Admin@Example.com".to_string(),
                password: "admin-pass-1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.account.user_id, admin.user_id);
        assert!(!output.token.is_empty());
    }

    #[tokio::test]
    async fn test_failures_are_indistinguishable() {
        let admin = account("Admin User", "admin@example.com", "admin-pass-1", Role::Admin);
        let repo = MemAccountsRepository::with(vec![admin]);
        let use_case = use_case(repo);

        let wrong_password = use_case
            .execute(LogInInput {
                email: "admin@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();

        let unknown_email = use_case
            .execute(LogInInput {
                email: "nobody@example.com".to_string(),
                password: "admin-pass-1".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AccountsError::InvalidCredentials));
        assert!(matches!(unknown_email, AccountsError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }
}

// ============================================================================
// Authentication (token -> actor)
// ============================================================================

mod authenticate_tests {
    use super::*;
    use crate::application::config::AccountsConfig;
    use crate::application::token::{self, TokenClaims};
    use crate::application::AuthenticateUseCase;
    use crate::error::AccountsError;

    fn token_for(account: &UserAccount, config: &AccountsConfig) -> String {
        let claims = TokenClaims::new(
            account.user_id.into_uuid(),
            account.role,
            config.token_ttl_ms(),
        );
        token::issue(&claims, &config.token_secret).unwrap()
    }

    #[tokio::test]
    async fn test_role_is_read_from_store_not_token() {
        let teacher = account("Ms. Smith", "smith@example.com", "teach-pass-1", Role::Teacher);
        let repo = MemAccountsRepository::with(vec![teacher.clone()]);
        let config = Arc::new(AccountsConfig::with_random_secret());

        let token = token_for(&teacher, &config);

        // Promote after the token was issued
        repo.set_role(&teacher.user_id, Role::Admin);

        let actor = AuthenticateUseCase::new(repo, config)
            .execute(&token)
            .await
            .unwrap();

        assert_eq!(actor.role, Role::Admin);
        assert_eq!(actor.name, "Ms. Smith");
    }

    #[tokio::test]
    async fn test_deleted_account_token_is_rejected() {
        let teacher = account("Ms. Smith", "smith@example.com", "teach-pass-1", Role::Teacher);
        let repo = MemAccountsRepository::with(vec![teacher.clone()]);
        let config = Arc::new(AccountsConfig::with_random_secret());

        let token = token_for(&teacher, &config);
        repo.remove(&teacher.user_id);

        let err = AuthenticateUseCase::new(repo, config)
            .execute(&token)
            .await
            .unwrap_err();

        assert!(matches!(err, AccountsError::TokenInvalid));
    }
}

// ============================================================================
// User management
// ============================================================================

mod user_management_tests {
    use super::*;
    use crate::application::config::{AccountsConfig, OrphanedNoticePolicy};
    use crate::application::{
        CreateUserInput, CreateUserUseCase, DeleteUserUseCase, UpdateUserRoleUseCase,
    };
    use crate::error::AccountsError;

    fn config() -> Arc<AccountsConfig> {
        Arc::new(AccountsConfig::with_random_secret())
    }

    fn create_input(email: &str, role: Role) -> CreateUserInput {
        CreateUserInput {
            name: "New User".to_string(),
            email: email.to_string(),
            password: "new-user-pass-1".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let existing = account("Old User", "taken@example.com", "old-pass-123", Role::Student);
        let repo = MemAccountsRepository::with(vec![existing]);

        let err = CreateUserUseCase::new(repo, config())
            .execute(create_input("Taken@Example.com", Role::Student))
            .await
            .unwrap_err();

        assert!(matches!(err, AccountsError::EmailTaken));
    }

    #[tokio::test]
    async fn test_third_admin_rejected() {
        let repo = MemAccountsRepository::with(vec![
            account("Admin One", "one@example.com", "admin-pass-1", Role::Admin),
            account("Admin Two", "two@example.com", "admin-pass-2", Role::Admin),
        ]);

        let err = CreateUserUseCase::new(repo, config())
            .execute(create_input("three@example.com", Role::Admin))
            .await
            .unwrap_err();

        assert!(matches!(err, AccountsError::AdminLimitReached { max: 2 }));
    }

    #[tokio::test]
    async fn test_weak_password_rejected() {
        let repo = MemAccountsRepository::with(vec![]);

        let err = CreateUserUseCase::new(repo, config())
            .execute(CreateUserInput {
                name: "New User".to_string(),
                email: "new@example.com".to_string(),
                password: "short".to_string(),
                role: Role::Student,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AccountsError::PasswordPolicy(_)));
    }

    #[tokio::test]
    async fn test_promotion_respects_admin_cap() {
        let teacher = account("Ms. Smith", "smith@example.com", "teach-pass-1", Role::Teacher);
        let repo = MemAccountsRepository::with(vec![
            account("Admin One", "one@example.com", "admin-pass-1", Role::Admin),
            account("Admin Two", "two@example.com", "admin-pass-2", Role::Admin),
            teacher.clone(),
        ]);

        let err = UpdateUserRoleUseCase::new(repo, config())
            .execute(teacher.user_id.into_uuid(), Role::Admin)
            .await
            .unwrap_err();

        assert!(matches!(err, AccountsError::AdminLimitReached { max: 2 }));
    }

    #[tokio::test]
    async fn test_last_admin_cannot_be_demoted() {
        let admin = account("Only Admin", "admin@example.com", "admin-pass-1", Role::Admin);
        let repo = MemAccountsRepository::with(vec![admin.clone()]);

        let err = UpdateUserRoleUseCase::new(repo, config())
            .execute(admin.user_id.into_uuid(), Role::Teacher)
            .await
            .unwrap_err();

        assert!(matches!(err, AccountsError::LastAdmin));
    }

    #[tokio::test]
    async fn test_same_role_is_a_noop() {
        let student = account("A Student", "kid@example.com", "student-pass", Role::Student);
        let repo = MemAccountsRepository::with(vec![student.clone()]);

        let updated = UpdateUserRoleUseCase::new(repo, config())
            .execute(student.user_id.into_uuid(), Role::Student)
            .await
            .unwrap();

        assert_eq!(updated.role, Role::Student);
    }

    #[tokio::test]
    async fn test_role_change_missing_user() {
        let repo = MemAccountsRepository::with(vec![]);

        let err = UpdateUserRoleUseCase::new(repo, config())
            .execute(Uuid::new_v4(), Role::Teacher)
            .await
            .unwrap_err();

        assert!(matches!(err, AccountsError::UserNotFound));
    }

    #[tokio::test]
    async fn test_cannot_delete_self() {
        let admin = account("Admin User", "admin@example.com", "admin-pass-1", Role::Admin);
        let repo = MemAccountsRepository::with(vec![admin.clone()]);

        let err = DeleteUserUseCase::new(repo, config())
            .execute(&actor_for(&admin), admin.user_id.into_uuid())
            .await
            .unwrap_err();

        assert!(matches!(err, AccountsError::CannotDeleteSelf));
    }

    #[tokio::test]
    async fn test_delete_missing_user() {
        let admin = account("Admin User", "admin@example.com", "admin-pass-1", Role::Admin);
        let repo = MemAccountsRepository::with(vec![admin.clone()]);

        let err = DeleteUserUseCase::new(repo, config())
            .execute(&actor_for(&admin), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, AccountsError::UserNotFound));
    }

    #[tokio::test]
    async fn test_delete_retains_notices_by_default() {
        let admin = account("Admin User", "admin@example.com", "admin-pass-1", Role::Admin);
        let teacher = account("Ms. Smith", "smith@example.com", "teach-pass-1", Role::Teacher);
        let repo = MemAccountsRepository::with(vec![admin.clone(), teacher.clone()]);

        DeleteUserUseCase::new(repo.clone(), config())
            .execute(&actor_for(&admin), teacher.user_id.into_uuid())
            .await
            .unwrap();

        assert!(repo.purged_authors().is_empty());
        assert!(repo.accounts.lock().unwrap().len() == 1);
    }

    #[tokio::test]
    async fn test_delete_policy_can_remove_notices() {
        let admin = account("Admin User", "admin@example.com", "admin-pass-1", Role::Admin);
        let teacher = account("Ms. Smith", "smith@example.com", "teach-pass-1", Role::Teacher);
        let repo = MemAccountsRepository::with(vec![admin.clone(), teacher.clone()]);

        let config = Arc::new(AccountsConfig {
            orphaned_notices: OrphanedNoticePolicy::Delete,
            ..AccountsConfig::with_random_secret()
        });

        DeleteUserUseCase::new(repo.clone(), config)
            .execute(&actor_for(&admin), teacher.user_id.into_uuid())
            .await
            .unwrap();

        assert_eq!(repo.purged_authors(), vec![teacher.user_id.into_uuid()]);
    }
}

// ============================================================================
// DTO serialization
// ============================================================================

mod dto_tests {
    use super::*;
    use crate::presentation::dto::{CreateUserRequest, LoginResponse, UserResponse};

    #[test]
    fn test_login_response_shape() {
        let response = LoginResponse {
            id: Uuid::nil(),
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
            token: "abc.def".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["role"], "ADMIN");
        assert_eq!(json["token"], "abc.def");
    }

    #[test]
    fn test_user_response_excludes_password() {
        let account = account("A Student", "kid@example.com", "student-pass", Role::Student);
        let json = serde_json::to_value(UserResponse::from(&account)).unwrap();

        assert_eq!(json["role"], "STUDENT");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn test_create_request_parses_role_codes() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{"name":"New","email":"new@example.com","password":"new-pass-123","role":"TEACHER"}"#,
        )
        .unwrap();
        assert_eq!(req.role, Role::Teacher);
    }
}

// ============================================================================
// Error mapping
// ============================================================================

mod error_tests {
    use super::*;
    use crate::error::AccountsError;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AccountsError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AccountsError::TokenInvalid.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AccountsError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AccountsError::UserNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AccountsError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AccountsError::AdminLimitReached { max: 2 }.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AccountsError::CannotDeleteSelf.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AccountsError::LastAdmin.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AccountsError::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_generic_credential_message() {
        // Must not leak whether the email exists
        assert_eq!(
            AccountsError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }
}
