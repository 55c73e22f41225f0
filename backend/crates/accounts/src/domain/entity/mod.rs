//! Domain Entities

pub mod user_account;
