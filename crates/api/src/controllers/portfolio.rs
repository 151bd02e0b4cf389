//! Public portfolio section: a listing gated by a one-shot reveal latch.

use folio_core::reveal::RevealLatch;
use folio_db::models::project::Project;
use folio_db::store::RecordStore;

use super::{ListController, ListState, Notice};

#[derive(Debug, Default)]
pub struct PortfolioSection {
    latch: RevealLatch,
    list: ListController,
    notice: Option<Notice>,
}

impl PortfolioSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a visibility observation to the latch.
    pub fn observe(&mut self, in_view: bool) -> bool {
        self.latch.observe(in_view)
    }

    pub fn is_revealed(&self) -> bool {
        self.latch.is_revealed()
    }

    pub async fn load(&mut self, store: &dyn RecordStore) {
        if let ListState::Failed(_) = self.list.load(store).await {
            self.notice = Some(Notice::error(
                "Failed to load projects. Please try again later.",
            ));
        }
    }

    pub fn list(&self) -> &ListController {
        &self.list
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Items to draw: everything loaded once revealed, nothing before.
    pub fn visible_projects(&self) -> &[Project] {
        if self.latch.is_revealed() {
            self.list.projects()
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_db::store::memory::MemoryStore;
    use folio_db::store::RecordStore;
    use serde_json::json;

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        let serde_json::Value::Object(row) = json!({"title": "A"}) else {
            unreachable!()
        };
        store.insert("projects", row).await.unwrap();
        store
    }

    #[tokio::test]
    async fn hidden_until_observed() {
        let store = seeded_store().await;
        let mut section = PortfolioSection::new();
        section.load(&store).await;

        assert_eq!(section.list().projects().len(), 1);
        assert!(section.visible_projects().is_empty());

        section.observe(false);
        assert!(section.visible_projects().is_empty());
        section.observe(true);
        section.observe(false);
        assert_eq!(section.visible_projects().len(), 1);
    }

    #[tokio::test]
    async fn load_failure_sets_notice() {
        let store = MemoryStore::new();
        store.set_fail_reads(true);
        let mut section = PortfolioSection::new();
        section.observe(true);
        section.load(&store).await;
        assert!(section.notice().is_some_and(Notice::is_error));
        assert!(section.visible_projects().is_empty());
    }
}
