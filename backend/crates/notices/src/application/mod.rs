//! Application Layer - Use Cases

pub mod delete_notice;
pub mod list_notices;
pub mod post_notice;

pub use delete_notice::DeleteNoticeUseCase;
pub use list_notices::{ListNoticesInput, ListNoticesUseCase};
pub use post_notice::{PostNoticeInput, PostNoticeUseCase};
