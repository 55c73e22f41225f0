//! Notice Board API Client
//!
//! Typed client for the notice board HTTP API plus the local state the
//! original frontend kept:
//! - `api` - reqwest-based JSON client
//! - `session` - persisted login session, cleared when unreadable
//! - `mirror` - local notice replica updated from mutation responses

pub mod api;
pub mod error;
pub mod mirror;
pub mod models;
pub mod session;

pub use api::ApiClient;
pub use error::{ClientError, ClientResult};
pub use mirror::NoticeMirror;
pub use models::{NewNotice, NewUser, NoticeQuery, NoticeView, StoredSession, UserView};
pub use session::SessionStore;
