//! Repository for the write-only `messages` collection.

use folio_core::message::ContactSubmission;

use crate::store::{RecordStore, Row, StoreError};

pub const TABLE: &str = "messages";

/// Stores contact form submissions. There is no read path.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert one message with `name`, `email` and `message` columns.
    pub async fn insert(
        store: &dyn RecordStore,
        submission: &ContactSubmission,
    ) -> Result<(), StoreError> {
        let mut row = Row::new();
        row.insert("name".into(), submission.name.clone().into());
        row.insert("email".into(), submission.email.clone().into());
        row.insert("message".into(), submission.message.clone().into());
        store.insert(TABLE, row).await
    }
}
