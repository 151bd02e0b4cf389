//! Request handlers.
//!
//! - [`site`], [`admin`] and the page half of [`auth`] render HTML and
//!   report failures as notices.
//! - [`project`], [`message`] and [`auth::login`] serve the JSON API and
//!   return [`AppResult`](crate::error::AppResult).

pub mod admin;
pub mod auth;
pub mod message;
pub mod project;
pub mod site;
