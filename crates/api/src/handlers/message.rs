//! Handler for the write-only `/messages` JSON resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::message::ContactSubmission;
use folio_db::repositories::MessageRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/messages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ContactSubmission>,
) -> AppResult<StatusCode> {
    input.check()?;
    MessageRepo::insert(state.store.as_ref(), &input).await?;
    Ok(StatusCode::CREATED)
}
