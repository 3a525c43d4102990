//! HTML page handlers backed by the static catalog.

use crate::catalog::{self, CatalogItem, Category};
use crate::error::AppError;
use crate::AppState;
use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate;

#[derive(Template)]
#[template(path = "category.html")]
struct CategoryTemplate {
    category: &'static str,
    items: &'static [CatalogItem],
}

#[derive(Template)]
#[template(path = "detail.html")]
struct DetailTemplate<'a> {
    category: &'static str,
    key: &'a str,
    item: &'static CatalogItem,
    maps_key: &'a str,
}

/// Render a template, mapping any failure to a 500 with the given safe
/// message. The underlying render error is logged, never exposed.
fn render<T: Template>(template: T, failure_message: &str) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| {
        tracing::error!(error = %e, "Template rendering failed");
        AppError::Internal(failure_message.to_string())
    })
}

pub async fn home() -> Result<Html<String>, AppError> {
    render(HomeTemplate, "Failed to load home page")
}

pub async fn category(Path(cat): Path<String>) -> Result<Html<String>, AppError> {
    let category = Category::parse(&cat).ok_or_else(|| {
        tracing::warn!(category = %cat, "Invalid category requested");
        AppError::BadRequest("Invalid category".to_string())
    })?;

    tracing::info!(category = %category, "Category page loaded");
    render(
        CategoryTemplate {
            category: category.as_str(),
            items: catalog::items(category),
        },
        "Failed to load category",
    )
}

pub async fn detail(
    State(state): State<AppState>,
    Path((cat, key)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let category = Category::parse(&cat).ok_or_else(|| {
        tracing::warn!(category = %cat, "Invalid category requested");
        AppError::BadRequest("Invalid category".to_string())
    })?;

    let item = catalog::find(category, &key).ok_or_else(|| {
        tracing::warn!(category = %category, key = %key, "Item not found");
        AppError::NotFound("Item not found".to_string())
    })?;

    tracing::info!(category = %category, key = %key, "Detail page loaded");
    render(
        DetailTemplate {
            category: category.as_str(),
            key: &key,
            item,
            maps_key: state.config.maps_api_key.as_deref().unwrap_or(""),
        },
        "Failed to load detail page",
    )
}
