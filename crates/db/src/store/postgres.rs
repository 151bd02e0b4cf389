//! Record store backed by a direct PostgreSQL connection.
//!
//! Rows travel as JSONB: reads use `to_jsonb(t)`, writes go through
//! `jsonb_populate_record` so column types come from the table definition
//! and columns absent from the payload keep their defaults.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{validate_identifier, Filter, RecordStore, Row, Select, StoreError};

/// Generic JSON-row access to PostgreSQL tables.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Double-quote a validated identifier.
fn quoted(name: &str) -> Result<String, StoreError> {
    Ok(format!("\"{}\"", validate_identifier(name)?))
}

/// Build the SQL text of a select. Filter values bind as `$1..$n` in order.
pub fn select_sql(query: &Select) -> Result<String, StoreError> {
    let mut sql = format!("SELECT to_jsonb(t) FROM {} t", quoted(&query.table)?);

    let mut clauses = Vec::with_capacity(query.filters.len());
    for (i, filter) in query.filters.iter().enumerate() {
        clauses.push(format!("t.{}::text = ${}", quoted(&filter.column)?, i + 1));
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    if let Some(order) = &query.order {
        let direction = if order.descending { "DESC" } else { "ASC" };
        sql.push_str(&format!(" ORDER BY t.{} {direction}", quoted(&order.column)?));
    }
    Ok(sql)
}

/// Build the SQL text of an insert of the given columns. The row binds as `$1`.
pub fn insert_sql(table: &str, columns: &[&str]) -> Result<String, StoreError> {
    let table = quoted(table)?;
    if columns.is_empty() {
        return Ok(format!("INSERT INTO {table} DEFAULT VALUES"));
    }
    let cols = columns
        .iter()
        .map(|c| quoted(c))
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");
    Ok(format!(
        "INSERT INTO {table} ({cols}) SELECT {cols} FROM jsonb_populate_record(NULL::{table}, $1)"
    ))
}

/// Build the SQL text of a keyed update. Values bind as `$1`, the key as `$2`.
pub fn update_sql(table: &str, filter: &Filter, columns: &[&str]) -> Result<String, StoreError> {
    if columns.is_empty() {
        return Err(StoreError::new("Update with no columns"));
    }
    let table = quoted(table)?;
    let assignments = columns
        .iter()
        .map(|c| quoted(c).map(|q| format!("{q} = r.{q}")))
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");
    Ok(format!(
        "UPDATE {table} AS t SET {assignments} \
         FROM jsonb_populate_record(NULL::{table}, $1) AS r \
         WHERE t.{}::text = $2",
        quoted(&filter.column)?
    ))
}

/// Build the SQL text of a keyed delete. The key binds as `$1`.
pub fn delete_sql(table: &str, filter: &Filter) -> Result<String, StoreError> {
    Ok(format!(
        "DELETE FROM {} WHERE {}::text = $1",
        quoted(table)?,
        quoted(&filter.column)?
    ))
}

#[async_trait]
impl RecordStore for PgStore {
    async fn select(&self, query: &Select) -> Result<Vec<Row>, StoreError> {
        tracing::debug!(table = %query.table, "Postgres select");
        let sql = select_sql(query)?;

        let mut q = sqlx::query_scalar::<_, serde_json::Value>(&sql);
        for filter in &query.filters {
            q = q.bind(filter.value.clone());
        }
        let values = q.fetch_all(&self.pool).await?;

        values
            .into_iter()
            .map(|value| match value {
                serde_json::Value::Object(row) => Ok(row),
                other => Err(StoreError::with_code(
                    "decode",
                    format!("Expected a JSON object row, got {other}"),
                )),
            })
            .collect()
    }

    async fn insert(&self, table: &str, row: Row) -> Result<(), StoreError> {
        tracing::debug!(table, "Postgres insert");
        let sql = {
            let columns: Vec<&str> = row.keys().map(String::as_str).collect();
            insert_sql(table, &columns)?
        };

        sqlx::query(&sql)
            .bind(serde_json::Value::Object(row))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update(&self, table: &str, filter: &Filter, values: Row) -> Result<u64, StoreError> {
        tracing::debug!(table, column = %filter.column, "Postgres update");
        let sql = {
            let columns: Vec<&str> = values.keys().map(String::as_str).collect();
            update_sql(table, filter, &columns)?
        };

        let result = sqlx::query(&sql)
            .bind(serde_json::Value::Object(values))
            .bind(filter.value.clone())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, table: &str, filter: &Filter) -> Result<u64, StoreError> {
        tracing::debug!(table, column = %filter.column, "Postgres delete");
        let sql = delete_sql(table, filter)?;

        let result = sqlx::query(&sql)
            .bind(filter.value.clone())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
