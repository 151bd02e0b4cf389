//! `/admin` pages. All of them require an admin session; unauthenticated
//! browsers are redirected to `/auth` by [`AdminPage`].
//!
//! Every action re-renders the page directly so notices and a rejected
//! draft survive without extra state.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Form;
use folio_core::project::ProjectFormData;
use serde::Deserialize;

use crate::controllers::AdminController;
use crate::middleware::auth::AdminPage;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    /// Project to load into the form.
    pub edit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirmed: bool,
}

/// GET /admin[?edit={id}]
pub async fn page(
    AdminPage(session): AdminPage,
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Html<String> {
    tracing::debug!(username = %session.username, "Admin page");
    let mut admin = AdminController::new();
    admin.mount(state.store.as_ref()).await;
    if let Some(id) = query.edit.as_deref().filter(|id| !id.is_empty()) {
        if let Err(err) = admin.select(id) {
            tracing::warn!(error = %err, "Edit target not in project list");
        }
    }
    Html(views::admin::render(&admin))
}

/// POST /admin/projects
///
/// Creates when the hidden `id` is blank, updates otherwise.
pub async fn save(
    AdminPage(_session): AdminPage,
    State(state): State<AppState>,
    Form(draft): Form<ProjectFormData>,
) -> Html<String> {
    let mut admin = AdminController::new();
    admin.submit(state.store.as_ref(), draft).await;
    admin.ensure_loaded(state.store.as_ref()).await;
    Html(views::admin::render(&admin))
}

/// POST /admin/projects/{id}/delete
pub async fn delete(
    AdminPage(session): AdminPage,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Html<String> {
    tracing::debug!(username = %session.username, id = %id, confirmed = form.confirmed, "Delete requested");
    let mut admin = AdminController::new();
    admin.delete(state.store.as_ref(), &id, form.confirmed).await;
    admin.ensure_loaded(state.store.as_ref()).await;
    Html(views::admin::render(&admin))
}
