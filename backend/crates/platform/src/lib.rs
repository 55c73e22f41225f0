//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Cryptographic utilities (secure randomness)
//! - Bearer token header extraction

pub mod bearer;
pub mod crypto;
pub mod password;
