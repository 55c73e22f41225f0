//! Application Layer - Use Cases

pub mod authenticate;
pub mod config;
pub mod create_user;
pub mod delete_user;
pub mod list_users;
pub mod log_in;
pub mod token;
pub mod update_user_role;

pub use authenticate::AuthenticateUseCase;
pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use delete_user::DeleteUserUseCase;
pub use list_users::ListUsersUseCase;
pub use log_in::{LogInInput, LogInOutput, LogInUseCase};
pub use update_user_role::UpdateUserRoleUseCase;
