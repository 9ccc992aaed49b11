//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Signed, time-bounded identity tokens (JWT, HS256)
//! - Cookie parsing for the HTTP boundary

pub mod cookie;
pub mod password;
pub mod token;
