//! Public contact form.

use folio_core::message::ContactSubmission;
use folio_db::repositories::MessageRepo;
use folio_db::store::RecordStore;

use super::{Notice, SubmitOutcome};

#[derive(Debug, Default)]
pub struct ContactController {
    draft: ContactSubmission,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: ContactSubmission) -> Self {
        Self { draft }
    }

    pub fn draft(&self) -> &ContactSubmission {
        &self.draft
    }

    /// Check the draft, then store it as one message.
    pub async fn submit(&mut self, store: &dyn RecordStore) -> SubmitOutcome {
        if let Err(err) = self.draft.check() {
            return SubmitOutcome::Rejected(Notice::from_validation(err));
        }

        let result = MessageRepo::insert(store, &self.draft).await;

        match result {
            Ok(()) => {
                tracing::info!("Contact message stored");
                self.draft = ContactSubmission::default();
                SubmitOutcome::Saved(Notice::success(
                    "Message sent successfully! I'll get back to you soon.",
                ))
            }
            Err(err) => {
                tracing::error!(error = %err, "Error submitting message");
                SubmitOutcome::Failed(Notice::error(
                    "Failed to send message. Please try again later.",
                ))
            }
        }
    }
}
