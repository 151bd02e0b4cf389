//! Create/edit form for a single project.

use folio_core::project::ProjectFormData;
use folio_db::models::project::Project;
use folio_db::repositories::ProjectRepo;
use folio_db::store::RecordStore;

use super::Notice;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored. The parent should re-fetch and clear its selection.
    Saved(Notice),
    /// Refused before any store call.
    Rejected(Notice),
    /// The store call failed; the draft is kept for another attempt.
    Failed(Notice),
}

impl SubmitOutcome {
    pub fn notice(&self) -> &Notice {
        match self {
            SubmitOutcome::Saved(n) | SubmitOutcome::Rejected(n) | SubmitOutcome::Failed(n) => n,
        }
    }

    pub fn into_notice(self) -> Notice {
        match self {
            SubmitOutcome::Saved(n) | SubmitOutcome::Rejected(n) | SubmitOutcome::Failed(n) => n,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }
}

/// Holds the draft and drives the submit protocol.
#[derive(Debug, Default)]
pub struct FormController {
    draft: ProjectFormData,
}

impl FormController {
    /// Empty draft in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-seed: edit mode from a persisted project, create mode otherwise.
    pub fn seed(&mut self, project: Option<&Project>) {
        self.draft = project.map(Project::to_form).unwrap_or_default();
    }

    /// Replace the draft with values the operator typed.
    pub fn set_draft(&mut self, draft: ProjectFormData) {
        self.draft = draft;
    }

    pub fn draft(&self) -> &ProjectFormData {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_editing()
    }

    /// Validate, then save through the repository.
    ///
    /// The draft is reset to create mode only after a successful save. The
    /// in-flight state belongs to the browser: the page's script disables the
    /// submit button until the response arrives.
    pub async fn submit(&mut self, store: &dyn RecordStore) -> SubmitOutcome {
        if let Err(err) = self.draft.validate() {
            return SubmitOutcome::Rejected(Notice::from_validation(err));
        }

        let is_editing = self.is_editing();
        let result = ProjectRepo::save(store, &self.draft, is_editing).await;

        match result {
            Ok(()) => {
                tracing::info!(id = %self.draft.id, is_editing, "Project saved");
                self.draft = ProjectFormData::default();
                SubmitOutcome::Saved(Notice::success(if is_editing {
                    "Project updated successfully"
                } else {
                    "Project created successfully"
                }))
            }
            Err(err) => {
                tracing::error!(error = %err, id = %self.draft.id, is_editing, "Error saving project");
                SubmitOutcome::Failed(Notice::error(if is_editing {
                    "Failed to update project"
                } else {
                    "Failed to create project"
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use folio_core::project::REQUIRED_FIELDS_MESSAGE;
    use folio_db::store::memory::MemoryStore;

    fn draft() -> ProjectFormData {
        ProjectFormData {
            title: "Brand Refresh".into(),
            description: "Full identity redesign".into(),
            category: "Branding".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn blank_required_field_makes_no_store_call() {
        let store = MemoryStore::new();
        let mut form = FormController::new();
        form.set_draft(ProjectFormData {
            category: "  ".into(),
            ..draft()
        });

        let outcome = form.submit(&store).await;
        assert_matches!(&outcome, SubmitOutcome::Rejected(n) if n.message == REQUIRED_FIELDS_MESSAGE);
        assert!(store.calls().is_empty());
        assert_eq!(form.draft().title, "Brand Refresh");
    }

    #[tokio::test]
    async fn create_success_resets_draft() {
        let store = MemoryStore::new();
        let mut form = FormController::new();
        form.set_draft(draft());

        let outcome = form.submit(&store).await;
        assert_matches!(&outcome, SubmitOutcome::Saved(n) if n.message == "Project created successfully");
        assert_eq!(form.draft(), &ProjectFormData::default());
        assert_eq!(store.write_calls().len(), 1);
    }

    #[tokio::test]
    async fn failure_keeps_draft() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        let mut form = FormController::new();
        form.set_draft(ProjectFormData {
            id: "missing".into(),
            ..draft()
        });

        let outcome = form.submit(&store).await;
        assert_matches!(&outcome, SubmitOutcome::Failed(n) if n.message == "Failed to update project");
        assert_eq!(form.draft().id, "missing");
        assert_eq!(form.draft().title, "Brand Refresh");
    }

    #[test]
    fn seeding_switches_modes() {
        let mut form = FormController::new();
        assert!(!form.is_editing());
        form.set_draft(ProjectFormData {
            id: "abc".into(),
            ..draft()
        });
        assert!(form.is_editing());
        form.seed(None);
        assert!(!form.is_editing());
        assert_eq!(form.draft(), &ProjectFormData::default());
    }
}
