//! PostgREST-style HTTP record store.
//!
//! Speaks the query-string dialect of hosted Postgres backends:
//! `GET /rest/v1/{table}?select=*&order=created_at.desc&id=eq.{id}`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{validate_identifier, Filter, RecordStore, Row, Select, StoreError};

/// Path prefix under which the backend exposes its tables.
const REST_PREFIX: &str = "rest/v1";

/// Error body returned by PostgREST on failure.
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// HTTP client for a hosted record store.
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    /// Create a store client with a per-request timeout.
    ///
    /// * `base_url` - project URL, e.g. `https://xyz.example.co`.
    /// * `api_key` - service key sent as both `apikey` and bearer token.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Full URL of a table endpoint.
    pub fn table_url(&self, table: &str) -> Result<String, StoreError> {
        let table = validate_identifier(table)?;
        Ok(format!("{}/{REST_PREFIX}/{table}", self.base_url))
    }

    // ---- private helpers ----

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Turn a non-2xx response into a [`StoreError`] carrying the store's
    /// own code and message when the body has them.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());

        let err = match serde_json::from_str::<RestErrorBody>(&body) {
            Ok(RestErrorBody {
                code,
                message: Some(message),
            }) => StoreError {
                code: Some(code.unwrap_or_else(|| status.as_u16().to_string())),
                message,
            },
            _ => StoreError::with_code(status.as_u16().to_string(), body),
        };
        Err(err)
    }

    /// Count the rows echoed back by a `return=representation` write.
    async fn affected_rows(response: reqwest::Response) -> Result<u64, StoreError> {
        let response = Self::ensure_success(response).await?;
        let rows: Vec<Row> = response.json().await?;
        Ok(rows.len() as u64)
    }
}

/// Query-string pairs for a select.
pub fn select_params(query: &Select) -> Result<Vec<(String, String)>, StoreError> {
    let mut params = vec![("select".to_string(), "*".to_string())];
    for filter in &query.filters {
        params.push(filter_param(filter)?);
    }
    if let Some(order) = &query.order {
        let column = validate_identifier(&order.column)?;
        let direction = if order.descending { "desc" } else { "asc" };
        params.push(("order".to_string(), format!("{column}.{direction}")));
    }
    Ok(params)
}

/// `column=eq.value` pair for an equality filter.
pub fn filter_param(filter: &Filter) -> Result<(String, String), StoreError> {
    let column = validate_identifier(&filter.column)?;
    Ok((column.to_string(), format!("eq.{}", filter.value)))
}

#[async_trait]
impl RecordStore for RestStore {
    async fn select(&self, query: &Select) -> Result<Vec<Row>, StoreError> {
        tracing::debug!(table = %query.table, "REST select");
        let url = self.table_url(&query.table)?;
        let params = select_params(query)?;

        let response = self
            .authorized(self.client.get(url))
            .query(&params)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<Vec<Row>>().await?)
    }

    async fn insert(&self, table: &str, row: Row) -> Result<(), StoreError> {
        tracing::debug!(table, "REST insert");
        let url = self.table_url(table)?;

        let response = self
            .authorized(self.client.post(url))
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn update(&self, table: &str, filter: &Filter, values: Row) -> Result<u64, StoreError> {
        tracing::debug!(table, column = %filter.column, "REST update");
        let url = self.table_url(table)?;

        let response = self
            .authorized(self.client.patch(url))
            .header("Prefer", "return=representation")
            .query(&[filter_param(filter)?])
            .json(&values)
            .send()
            .await?;
        Self::affected_rows(response).await
    }

    async fn delete(&self, table: &str, filter: &Filter) -> Result<u64, StoreError> {
        tracing::debug!(table, column = %filter.column, "REST delete");
        let url = self.table_url(table)?;

        let response = self
            .authorized(self.client.delete(url))
            .header("Prefer", "return=representation")
            .query(&[filter_param(filter)?])
            .send()
            .await?;
        Self::affected_rows(response).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let url = format!("{}/{REST_PREFIX}/", self.base_url);
        let response = self.authorized(self.client.get(url)).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
