//! State of the `/admin` page: list, form, selection and notices.

use folio_core::error::CoreError;
use folio_core::project::ProjectFormData;
use folio_core::types::RecordId;
use folio_db::repositories::ProjectRepo;
use folio_db::store::RecordStore;

use super::{FormController, ListController, ListState, Notice};

/// Owns everything the admin page shows for one request.
///
/// Mutations never touch the loaded list directly; every success is
/// followed by a full re-fetch.
#[derive(Debug, Default)]
pub struct AdminController {
    list: ListController,
    form: FormController,
    selected: Option<RecordId>,
    notices: Vec<Notice>,
}

impl AdminController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &ListController {
        &self.list
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Initial fetch when the page is opened.
    pub async fn mount(&mut self, store: &dyn RecordStore) {
        self.refresh(store).await;
    }

    /// Fetch only if nothing has been fetched for this request yet.
    pub async fn ensure_loaded(&mut self, store: &dyn RecordStore) {
        if self.list.is_loading() {
            self.refresh(store).await;
        }
    }

    /// Seed the form from a loaded project.
    ///
    /// An id missing from the loaded list leaves the form untouched, adds a
    /// notice and returns [`CoreError::NotFound`].
    pub fn select(&mut self, id: &str) -> Result<(), CoreError> {
        let Some(project) = self.list.projects().iter().find(|p| p.id == id) else {
            self.notices.push(Notice::error("Project not found"));
            return Err(CoreError::NotFound {
                entity: "Project",
                id: id.to_string(),
            });
        };
        self.form.seed(Some(project));
        self.selected = Some(project.id.clone());
        Ok(())
    }

    /// Drop the selection and go back to an empty create form.
    pub fn cancel(&mut self) {
        self.selected = None;
        self.form.seed(None);
    }

    /// Submit values posted from the form.
    pub async fn submit(&mut self, store: &dyn RecordStore, draft: ProjectFormData) {
        self.selected = draft.is_editing().then(|| draft.id.clone());
        self.form.set_draft(draft);

        let outcome = self.form.submit(store).await;
        let saved = outcome.is_saved();
        self.notices.push(outcome.into_notice());
        if saved {
            self.selected = None;
            self.refresh(store).await;
        }
    }

    /// Delete a project. Without confirmation nothing happens.
    pub async fn delete(&mut self, store: &dyn RecordStore, id: &str, confirmed: bool) {
        if !confirmed {
            tracing::debug!(id, "Delete not confirmed");
            return;
        }

        match ProjectRepo::delete(store, id).await {
            Ok(()) => {
                tracing::info!(id, "Project deleted");
                self.notices.push(Notice::success("Project deleted successfully"));
                if self.selected.as_deref() == Some(id) {
                    self.cancel();
                }
                self.refresh(store).await;
            }
            Err(err) => {
                tracing::error!(error = %err, id, "Error deleting project");
                self.notices.push(Notice::error("Failed to delete project"));
            }
        }
    }

    async fn refresh(&mut self, store: &dyn RecordStore) {
        if let ListState::Failed(_) = self.list.load(store).await {
            self.notices.push(Notice::error("Failed to load projects"));
        }
    }
}
