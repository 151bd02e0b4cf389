//! Repository for the `projects` collection.

use folio_core::project::ProjectFormData;

use crate::models::project::{Project, ProjectFields};
use crate::store::{Filter, RecordStore, Select, StoreError};

pub const TABLE: &str = "projects";

/// Sort key for listings. Newest first.
const ORDER_COLUMN: &str = "created_at";

/// Provides the list/create/update/delete operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// All projects, most recently created first.
    ///
    /// Any failure, including a row that does not decode, fails the whole
    /// call so callers never see a partial list.
    pub async fn fetch_all(store: &dyn RecordStore) -> Result<Vec<Project>, StoreError> {
        let query = Select::table(TABLE).order_by(ORDER_COLUMN, true);
        store
            .select(&query)
            .await?
            .into_iter()
            .map(Project::from_row)
            .collect()
    }

    /// Find a project by id.
    pub async fn find_by_id(
        store: &dyn RecordStore,
        id: &str,
    ) -> Result<Option<Project>, StoreError> {
        let query = Select::table(TABLE).filter(Filter::eq("id", id));
        let mut rows = store.select(&query).await?;
        rows.pop().map(Project::from_row).transpose()
    }

    /// Create or update, depending on `is_editing`.
    ///
    /// Editing issues one update keyed by `form.id` writing only the four
    /// form columns, and fails if no row matched. Otherwise one insert of the
    /// same columns; the store assigns `id` and `created_at`.
    pub async fn save(
        store: &dyn RecordStore,
        form: &ProjectFormData,
        is_editing: bool,
    ) -> Result<(), StoreError> {
        let values = ProjectFields::from(form).into_row();

        if is_editing {
            let touched = store
                .update(TABLE, &Filter::eq("id", form.id.as_str()), values)
                .await?;
            if touched == 0 {
                return Err(StoreError::not_found(TABLE, &form.id));
            }
            Ok(())
        } else {
            store.insert(TABLE, values).await
        }
    }

    /// Permanently delete a project. Fails if no row had this id.
    pub async fn delete(store: &dyn RecordStore, id: &str) -> Result<(), StoreError> {
        let removed = store.delete(TABLE, &Filter::eq("id", id)).await?;
        if removed == 0 {
            return Err(StoreError::not_found(TABLE, id));
        }
        Ok(())
    }
}
