//! AI article generation endpoint.

use crate::catalog::Category;
use crate::error::AppError;
use crate::models::{GenerateRequest, GenerateResponse, Language};
use crate::services::markdown::clean_markdown;
use crate::services::providers::{GenerationParams, ProviderError};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};

/// `POST /generate`: validate, prompt the text provider, clean the result.
///
/// Validation order is fixed: body presence, name, category presence,
/// category membership, language membership. Each failure is a 400 with
/// its own reason.
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Empty or undecodable body for /generate");
        AppError::BadRequest("Request body cannot be empty".to_string())
    })?;

    // A decodable but field-less body ({}) counts as an empty request too.
    if request.is_empty() {
        tracing::warn!("Empty request body for /generate");
        return Err(AppError::BadRequest(
            "Request body cannot be empty".to_string(),
        ));
    }

    let name = request.name.as_deref().unwrap_or("").trim();
    let category_raw = request.category.as_deref().unwrap_or("").trim();
    let language_raw = request.language.as_deref().unwrap_or("English").trim();

    if name.is_empty() {
        tracing::warn!("Missing 'name' parameter in /generate");
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    if category_raw.is_empty() {
        tracing::warn!("Missing 'category' parameter in /generate");
        return Err(AppError::BadRequest("Category is required".to_string()));
    }

    let category = Category::parse(category_raw).ok_or_else(|| {
        tracing::warn!(category = %category_raw, "Invalid category in /generate");
        AppError::BadRequest("Invalid category".to_string())
    })?;

    let language = Language::parse(language_raw).ok_or_else(|| {
        tracing::warn!(language = %language_raw, "Invalid language in /generate");
        AppError::BadRequest("Invalid language".to_string())
    })?;

    let prompt = build_prompt(name, category, language);

    tracing::info!(name = %name, language = %language.as_str(), "Generating content");

    let response = state
        .text_provider
        .generate(&prompt, &GenerationParams::default())
        .await
        .map_err(|e| map_provider_error(e, name, language))?;

    let text = clean_markdown(&response.text);

    tracing::info!(name = %name, "Successfully generated content");
    Ok(Json(GenerateResponse { text }))
}

fn build_prompt(name: &str, category: Category, language: Language) -> String {
    format!(
        "You are an expert Indian heritage historian.\n\n\
         Write a VERY LONG, DETAILED, PROFESSIONAL museum-style article about:\n\n\
         {name}\n\
         Category: {category}\n\n\
         CRITICAL RULES:\n\
         - {instruction}\n\
         - Do NOT use markdown\n\
         - Do NOT use symbols\n\
         - Do NOT use bullets\n\
         - Do NOT mention AI\n\
         - Write MINIMUM 600-800 words\n\
         - Write clean natural paragraphs\n",
        name = name,
        category = category.as_str(),
        instruction = language.instruction(),
    )
}

fn map_provider_error(err: ProviderError, name: &str, language: Language) -> AppError {
    match err {
        ProviderError::Timeout => {
            tracing::error!(name = %name, language = %language.as_str(), "Timeout calling Groq API");
            AppError::UpstreamTimeout("Request timeout. Please try again.".to_string())
        }
        ProviderError::Connection(detail) => {
            tracing::error!(
                name = %name,
                language = %language.as_str(),
                error = %detail,
                "Connection error calling Groq API"
            );
            AppError::UpstreamUnavailable("Connection error. Please check your internet.".to_string())
        }
        other => {
            tracing::error!(
                name = %name,
                language = %language.as_str(),
                error = %other,
                "Error generating content"
            );
            AppError::Internal("Failed to generate content. Please try again.".to_string())
        }
    }
}
