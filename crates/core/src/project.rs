//! Portfolio entry form shape, lifecycle helpers and validation.
//!
//! A [`ProjectFormData`] is the editable subset of a project held by the
//! admin form. Its `id` decides the lifecycle: empty means a draft that has
//! never been stored, anything else names a persisted record.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::RecordId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Image shown for entries stored without an `image_url`. Render-time only.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=2340";

/// Message shown when a required field is left empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

// ---------------------------------------------------------------------------
// Form data
// ---------------------------------------------------------------------------

/// Editable fields of a project, exactly as the admin form holds them.
///
/// Optional store columns are represented by empty strings here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFormData {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
}

impl ProjectFormData {
    /// `true` when the form targets an existing record (non-blank id).
    pub fn is_editing(&self) -> bool {
        is_persisted_id(&self.id)
    }

    /// Check the fields the form requires before any store call is made.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required(&self.title, &self.description, &self.category)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `true` for an empty or whitespace-only value.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A store-assigned id is never blank; drafts carry an empty one.
pub fn is_persisted_id(id: &str) -> bool {
    !is_blank(id)
}

/// Title, description and category must all be non-blank.
pub fn validate_required(title: &str, description: &str, category: &str) -> Result<(), CoreError> {
    if [title, description, category].iter().any(|v| is_blank(v)) {
        return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }
    Ok(())
}

/// Pick the image to render for a project, substituting the fallback when
/// the stored value is missing or blank.
pub fn resolve_image_url(image_url: Option<&str>) -> &str {
    match image_url {
        Some(url) if !is_blank(url) => url,
        _ => FALLBACK_IMAGE_URL,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
