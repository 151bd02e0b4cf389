//! Project record and write payload.

use folio_core::project::{resolve_image_url, ProjectFormData};
use folio_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::store::{Row, StoreError};

/// A row from the `projects` collection.
///
/// `project_url`, `tags` and `updated_at` are reserved columns: decoded when
/// present, never written or displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Project {
    /// Image to render, with the fallback substituted when none is stored.
    pub fn image_src(&self) -> &str {
        resolve_image_url(self.image_url.as_deref())
    }

    /// Seed an edit form from this record. Missing optionals become `""`.
    pub fn to_form(&self) -> ProjectFormData {
        ProjectFormData {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            image_url: self.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn from_row(row: Row) -> Result<Self, StoreError> {
        Ok(serde_json::from_value(serde_json::Value::Object(row))?)
    }
}

/// The four columns a create or update writes. Never carries `id`,
/// `created_at` or any reserved column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
}

impl From<&ProjectFormData> for ProjectFields {
    fn from(form: &ProjectFormData) -> Self {
        Self {
            title: form.title.clone(),
            description: form.description.clone(),
            category: form.category.clone(),
            image_url: form.image_url.clone(),
        }
    }
}

impl ProjectFields {
    pub fn into_row(self) -> Row {
        let mut row = Row::new();
        row.insert("title".into(), self.title.into());
        row.insert("description".into(), self.description.into());
        row.insert("category".into(), self.category.into());
        row.insert("image_url".into(), self.image_url.into());
        row
    }
}
