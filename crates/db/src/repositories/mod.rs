//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept `&dyn RecordStore` as the first argument. Repositories translate
//! intents into single store calls and pass store errors through unchanged;
//! they do no validation of their own.

pub mod message_repo;
pub mod project_repo;

pub use message_repo::MessageRepo;
pub use project_repo::ProjectRepo;
