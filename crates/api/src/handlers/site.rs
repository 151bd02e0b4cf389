//! Public landing page and its portfolio fragment.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use axum::Form;
use folio_core::message::ContactSubmission;
use serde::Deserialize;

use crate::controllers::{ContactController, PortfolioSection};
use crate::middleware::auth::has_admin_session;
use crate::state::AppState;
use crate::views::landing::{self, LandingView};

#[derive(Debug, Default, Deserialize)]
pub struct LandingQuery {
    /// Render the portfolio already revealed (no-script fallback).
    #[serde(default)]
    pub reveal: Option<String>,
}

impl LandingQuery {
    fn wants_reveal(&self) -> bool {
        matches!(self.reveal.as_deref(), Some("1" | "true"))
    }
}

/// GET /
pub async fn landing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LandingQuery>,
) -> Html<String> {
    let mut portfolio = PortfolioSection::new();
    portfolio.observe(query.wants_reveal());
    portfolio.load(state.store.as_ref()).await;

    Html(landing::render(&LandingView {
        portfolio: &portfolio,
        contact: &ContactSubmission::default(),
        contact_notice: None,
        signed_in: has_admin_session(&headers, &state.config.jwt),
    }))
}

/// GET /sections/portfolio
///
/// Requested by the client script once the section has scrolled into view,
/// so the latch is set before rendering.
pub async fn portfolio_fragment(State(state): State<AppState>) -> Html<String> {
    let mut portfolio = PortfolioSection::new();
    portfolio.observe(true);
    portfolio.load(state.store.as_ref()).await;
    Html(landing::portfolio_fragment(&portfolio))
}

/// POST /contact
pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<ContactSubmission>,
) -> Html<String> {
    let mut contact = ContactController::with_draft(input);
    let outcome = contact.submit(state.store.as_ref()).await;

    let mut portfolio = PortfolioSection::new();
    portfolio.load(state.store.as_ref()).await;

    Html(landing::render(&LandingView {
        portfolio: &portfolio,
        contact: contact.draft(),
        contact_notice: Some(outcome.notice()),
        signed_in: has_admin_session(&headers, &state.config.jwt),
    }))
}
