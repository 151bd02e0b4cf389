//! Domain layer for the Folio portfolio site.
//!
//! Pure types and validation with no I/O: the `Project` record and its form
//! shape, contact messages, the error taxonomy shared by the other crates,
//! and the one-shot reveal latch used by the landing page sections.

pub mod error;
pub mod message;
pub mod project;
pub mod reveal;
pub mod types;
