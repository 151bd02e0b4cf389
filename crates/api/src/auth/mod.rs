//! Authentication primitives for the admin area.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- session token generation and validation.

pub mod jwt;
pub mod password;

/// Cookie carrying the admin session token for browser requests.
pub const SESSION_COOKIE: &str = "folio_session";

/// Role embedded in every session token.
pub const ADMIN_ROLE: &str = "admin";
