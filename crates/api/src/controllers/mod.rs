//! Per-request page state.
//!
//! Every page is driven by one top-level controller built fresh for the
//! request from a single store fetch. Controllers catch store failures, log
//! them and turn them into [`Notice`]s; they never propagate an error to the
//! HTTP layer.

use folio_core::error::CoreError;

pub mod admin;
pub mod contact;
pub mod form;
pub mod list;
pub mod portfolio;

pub use admin::AdminController;
pub use contact::ContactController;
pub use form::{FormController, SubmitOutcome};
pub use list::{ListController, ListState};
pub use portfolio::PortfolioSection;

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

/// A transient message shown to the visitor after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Error notice carrying a validation message without its prefix.
    pub fn from_validation(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => Self::error(message),
            other => Self::error(other.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}
