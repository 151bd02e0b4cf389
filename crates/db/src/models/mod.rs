//! Row shapes exchanged with the record store.
//!
//! Each submodule contains:
//! - A `Deserialize` record struct matching what a select returns
//! - A `Serialize` write payload holding only the columns clients may set

pub mod project;
