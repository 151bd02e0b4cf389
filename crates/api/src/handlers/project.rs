//! Handlers for the `/projects` JSON resource.
//!
//! Writes answer with the re-fetched list so clients never patch their own
//! copy. The write's status never depends on that re-fetch: if it fails the
//! write is still reported as done and `data` is `null`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::project::ProjectFormData;
use folio_db::models::project::Project;
use folio_db::repositories::ProjectRepo;
use folio_db::store::RecordStore;

use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::fetch_all(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/projects
///
/// Any `id` in the body is ignored; the store assigns one.
pub async fn create(
    admin: AdminSession,
    State(state): State<AppState>,
    Json(mut input): Json<ProjectFormData>,
) -> AppResult<(StatusCode, Json<DataResponse<Option<Vec<Project>>>>)> {
    input.id.clear();
    input.validate()?;
    ProjectRepo::save(state.store.as_ref(), &input, false).await?;
    tracing::info!(username = %admin.username, title = %input.title, "Project created");

    let projects = refetch(state.store.as_ref()).await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: projects })))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut input): Json<ProjectFormData>,
) -> AppResult<Json<DataResponse<Option<Vec<Project>>>>> {
    input.id = id;
    input.validate()?;
    ProjectRepo::save(state.store.as_ref(), &input, true).await?;
    tracing::info!(username = %admin.username, id = %input.id, "Project updated");

    let projects = refetch(state.store.as_ref()).await;
    Ok(Json(DataResponse { data: projects }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    ProjectRepo::delete(state.store.as_ref(), &id).await?;
    tracing::info!(username = %admin.username, id = %id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// List after a committed write. A failure here is logged, not returned.
async fn refetch(store: &dyn RecordStore) -> Option<Vec<Project>> {
    match ProjectRepo::fetch_all(store).await {
        Ok(projects) => Some(projects),
        Err(err) => {
            tracing::error!(error = %err, "Re-fetch after project write failed");
            None
        }
    }
}
