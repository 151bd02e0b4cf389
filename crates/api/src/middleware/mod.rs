//! Request extractors guarding the admin area.
//!
//! - [`auth::AdminSession`] -- JSON routes; rejects with a 401 error body.
//! - [`auth::AdminPage`] -- HTML routes; rejects with a redirect to `/auth`.

pub mod auth;
