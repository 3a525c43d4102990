//! Wikipedia image aggregation endpoint.
//!
//! Deliberately best-effort: upstream failures degrade to a partial or
//! empty list, never to a user-visible error.

use crate::models::WikiImageParams;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;

/// `GET /wiki_images?title=...`: up to 8 image URLs, always 200.
///
/// An empty title after trimming is a defined non-error outcome and makes
/// no outbound calls.
pub async fn wiki_images(
    State(state): State<AppState>,
    Query(params): Query<WikiImageParams>,
) -> Json<Vec<String>> {
    let title = params.title.as_deref().unwrap_or("").trim();

    if title.is_empty() {
        tracing::warn!("Missing 'title' parameter in /wiki_images");
        return Json(Vec::new());
    }

    let harvest = state.wiki.harvest(title).await;

    if let Some(e) = &harvest.summary_error {
        tracing::warn!(title = %title, error = %e, "Wikipedia summary fetch failed");
    }
    if let Some(e) = &harvest.scrape_error {
        tracing::warn!(title = %title, error = %e, "Wikipedia page scrape failed");
    }

    tracing::info!(title = %title, count = harvest.urls.len(), "Collected Wikipedia images");
    Json(harvest.urls)
}
