//! In-process record store.
//!
//! Behaves like the hosted store for the operations the site uses: assigns
//! `id` (UUID v4) and `created_at` on insert, orders and filters selects, and
//! reports touched row counts. Every call is recorded as a [`StoreCall`] and
//! reads or writes can be switched to fail, which is what the tests lean on.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::Value;

use super::{Filter, RecordStore, Row, Select, StoreError};

/// A call as it reached the store, failed or not.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Select(Select),
    Insert { table: String, row: Row },
    Update { table: String, filter: Filter, values: Row },
    Delete { table: String, filter: Filter },
}

impl StoreCall {
    pub fn is_write(&self) -> bool {
        !matches!(self, StoreCall::Select(_))
    }
}

#[derive(Default)]
struct Inner {
    tables: HashMap<String, Vec<Row>>,
    calls: Vec<StoreCall>,
    fail_reads: bool,
    fail_writes: bool,
    last_created_at: Option<DateTime<Utc>>,
}

impl Inner {
    /// Strictly increasing insert timestamps, even within one clock tick.
    fn next_created_at(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.last_created_at {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_created_at = Some(next);
        next
    }
}

/// Thread-safe in-memory tables.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every subsequent select fail until switched back.
    pub fn set_fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    /// Make every subsequent insert, update and delete fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Calls received so far that write.
    pub fn write_calls(&self) -> Vec<StoreCall> {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.is_write())
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Current contents of a table in insertion order.
    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.lock().tables.get(table).cloned().unwrap_or_default()
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn matches(row: &Row, filter: &Filter) -> bool {
    row.get(&filter.column)
        .is_some_and(|v| text_of(v) == filter.value)
}

/// Order two JSON cells: nulls first, then numbers or strings by value.
fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(x), Some(y)) => text_of(x).cmp(&text_of(y)),
    }
}

fn write_failure() -> StoreError {
    StoreError::with_code("unavailable", "Record store rejected the write")
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn select(&self, query: &Select) -> Result<Vec<Row>, StoreError> {
        let mut inner = self.lock();
        inner.calls.push(StoreCall::Select(query.clone()));
        if inner.fail_reads {
            return Err(StoreError::with_code(
                "unavailable",
                "Record store rejected the query",
            ));
        }

        let mut rows: Vec<Row> = inner
            .tables
            .get(&query.table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| query.filters.iter().all(|f| matches(row, f)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ord = compare(a.get(&order.column), b.get(&order.column));
                if order.descending {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, mut row: Row) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.calls.push(StoreCall::Insert {
            table: table.to_string(),
            row: row.clone(),
        });
        if inner.fail_writes {
            return Err(write_failure());
        }

        if !row.contains_key("id") {
            row.insert(
                "id".into(),
                Value::String(uuid::Uuid::new_v4().to_string()),
            );
        }
        if !row.contains_key("created_at") {
            let created_at = inner.next_created_at();
            row.insert(
                "created_at".into(),
                Value::String(created_at.to_rfc3339_opts(SecondsFormat::Micros, true)),
            );
        }
        inner.tables.entry(table.to_string()).or_default().push(row);
        Ok(())
    }

    async fn update(&self, table: &str, filter: &Filter, values: Row) -> Result<u64, StoreError> {
        let mut inner = self.lock();
        inner.calls.push(StoreCall::Update {
            table: table.to_string(),
            filter: filter.clone(),
            values: values.clone(),
        });
        if inner.fail_writes {
            return Err(write_failure());
        }

        let mut touched = 0;
        if let Some(rows) = inner.tables.get_mut(table) {
            for row in rows.iter_mut().filter(|row| matches(row, filter)) {
                for (column, value) in &values {
                    row.insert(column.clone(), value.clone());
                }
                touched += 1;
            }
        }
        Ok(touched)
    }

    async fn delete(&self, table: &str, filter: &Filter) -> Result<u64, StoreError> {
        let mut inner = self.lock();
        inner.calls.push(StoreCall::Delete {
            table: table.to_string(),
            filter: filter.clone(),
        });
        if inner.fail_writes {
            return Err(write_failure());
        }

        let Some(rows) = inner.tables.get_mut(table) else {
            return Ok(0);
        };
        let before = rows.len();
        rows.retain(|row| !matches(row, filter));
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
