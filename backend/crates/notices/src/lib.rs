//! Notices Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Model
//! - Notices are immutable once posted; the only mutations are post
//!   and delete
//! - The author's display name is snapshotted onto the notice at
//!   posting time
//! - Listing is public; posting requires the teacher or admin role;
//!   deletion follows `domain::policy::can_delete`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{NoticeError, NoticeResult};
pub use infra::postgres::PgNoticeRepository;
pub use presentation::router::notice_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod policy {
    pub use crate::domain::policy::*;
}
