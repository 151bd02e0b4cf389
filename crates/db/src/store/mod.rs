//! The record store boundary.
//!
//! Persistence is delegated to an external table-oriented service. Every
//! caller goes through [`RecordStore`], which speaks in JSON rows so the same
//! repositories run against a PostgREST endpoint ([`RestStore`]), a direct
//! PostgreSQL connection ([`PgStore`]) or the in-process [`MemoryStore`].

use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;

pub mod memory;
pub mod postgres;
pub mod rest;

pub use memory::{MemoryStore, StoreCall};
pub use postgres::PgStore;
pub use rest::RestStore;

/// A single record as the store returns it: column name -> JSON value.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Handle shared by every request.
pub type SharedStore = Arc<dyn RecordStore>;

/// Error code attached when a keyed write matched no row.
pub const CODE_NOT_FOUND: &str = "not_found";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// The one failure kind of the store boundary.
///
/// Wraps whatever the store reported (query failure, constraint violation,
/// transport failure) without classifying it further. `code` carries the
/// store's own code when it supplied one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub code: Option<String>,
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// A keyed update or delete matched nothing.
    pub fn not_found(table: &str, id: &str) -> Self {
        Self::with_code(CODE_NOT_FOUND, format!("No row in {table} with id {id}"))
    }

    pub fn is_not_found(&self) -> bool {
        self.code.as_deref() == Some(CODE_NOT_FOUND)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => match db_err.code() {
                Some(code) => Self::with_code(code.into_owned(), db_err.message()),
                None => Self::new(db_err.message()),
            },
            _ => Self::new(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::with_code("timeout", err.to_string())
        } else {
            Self::new(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_code("decode", err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Equality filter on a single column, compared as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub descending: bool,
}

/// `SELECT *` over one table with optional equality filters and ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub table: String,
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
}

impl Select {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filters: Vec::new(),
            order: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, descending: bool) -> Self {
        self.order = Some(Order {
            column: column.into(),
            descending,
        });
        self
    }
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Table-oriented record store.
///
/// Each method is a single atomic store operation; no implementation retries.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All columns of the matching rows, in the requested order.
    async fn select(&self, query: &Select) -> Result<Vec<Row>, StoreError>;

    /// Insert one row. Server-managed columns are filled by the store.
    async fn insert(&self, table: &str, row: Row) -> Result<(), StoreError>;

    /// Overwrite exactly the columns in `values` on matching rows.
    /// Returns the number of rows touched.
    async fn update(&self, table: &str, filter: &Filter, values: Row) -> Result<u64, StoreError>;

    /// Remove matching rows. Returns the number of rows removed.
    async fn delete(&self, table: &str, filter: &Filter) -> Result<u64, StoreError>;

    /// Cheap reachability probe used by `/health`.
    async fn ping(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("identifier pattern is valid"));

/// Reject table or column names that are not plain lowercase identifiers.
///
/// Identifiers end up in SQL text and URL paths, so anything else is refused
/// before it reaches the store.
pub fn validate_identifier(name: &str) -> Result<&str, StoreError> {
    if IDENTIFIER.is_match(name) {
        Ok(name)
    } else {
        Err(StoreError::with_code(
            "invalid_identifier",
            format!("Invalid identifier '{name}'"),
        ))
    }
}
