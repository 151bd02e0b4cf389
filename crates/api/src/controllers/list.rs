//! Listing state machine shared by the public grid and the admin table.

use folio_db::models::project::Project;
use folio_db::repositories::ProjectRepo;
use folio_db::store::RecordStore;

/// `Loading` until a fetch settles, then exactly one of the other two.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Project>),
    /// Holds the store's message for logs; never rendered verbatim.
    Failed(String),
}

#[derive(Debug)]
pub struct ListController {
    state: ListState,
}

impl Default for ListController {
    fn default() -> Self {
        Self::new()
    }
}

impl ListController {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Re-enter `Loading`, fetch once, and settle.
    ///
    /// A failed fetch discards whatever was loaded before so a stale list is
    /// never shown.
    pub async fn load(&mut self, store: &dyn RecordStore) -> &ListState {
        self.state = ListState::Loading;
        self.state = match ProjectRepo::fetch_all(store).await {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "Projects loaded");
                ListState::Loaded(projects)
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching projects");
                ListState::Failed(err.to_string())
            }
        };
        &self.state
    }

    /// Loaded projects, or an empty slice in any other state.
    pub fn projects(&self) -> &[Project] {
        match &self.state {
            ListState::Loaded(projects) => projects,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, ListState::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use folio_db::store::memory::MemoryStore;

    #[tokio::test]
    async fn starts_loading_and_settles_loaded() {
        let store = MemoryStore::new();
        let mut list = ListController::new();
        assert!(list.is_loading());

        assert_matches!(list.load(&store).await, ListState::Loaded(p) if p.is_empty());
        assert!(list.projects().is_empty());
    }

    #[tokio::test]
    async fn failure_replaces_previous_data() {
        let store = MemoryStore::new();
        let mut list = ListController::new();
        list.load(&store).await;

        store.set_fail_reads(true);
        assert_matches!(list.load(&store).await, ListState::Failed(_));
        assert!(list.projects().is_empty());
        assert!(list.is_failed());
    }
}
