//! Wikipedia image harvesting.
//!
//! Collects candidate photograph URLs for a catalog item from two sources:
//! the REST page-summary endpoint (lead image) and the raw article HTML
//! (inline upload-host references). Both fetches are best-effort; a failed
//! sub-fetch is recorded on the harvest rather than aborting it.

use crate::catalog;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Hard cap on returned URLs.
const MAX_IMAGES: usize = 8;

const USER_AGENT: &str = "Mozilla/5.0";

const RASTER_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png"];

static UPLOAD_SRC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"src="(https://upload\.wikimedia\.org/[^"]+)""#).unwrap());

/// Error type for a single Wikipedia fetch.
#[derive(Debug, Error)]
pub enum WikiFetchError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Http(String),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Outcome of one harvesting pass: the best-effort URL list plus a record
/// of which sub-fetch failed, if any. Callers log the errors and return
/// the list regardless.
#[derive(Debug, Default)]
pub struct ImageHarvest {
    pub urls: Vec<String>,
    pub summary_error: Option<WikiFetchError>,
    pub scrape_error: Option<WikiFetchError>,
}

/// Wikipedia image fetcher.
#[derive(Clone)]
pub struct WikiImageFetcher {
    client: Client,
    api_base: String,
}

impl WikiImageFetcher {
    pub fn new(api_base: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Harvest up to [`MAX_IMAGES`] image URLs for a display title.
    ///
    /// The title goes through alias resolution first, then spaces become
    /// underscores for URL use. Discovery order is preserved: lead image
    /// first, then scraped images in document order, de-duplicated.
    pub async fn harvest(&self, title: &str) -> ImageHarvest {
        let mut harvest = ImageHarvest::default();

        let canonical = catalog::canonical_wiki_title(title);
        let safe_title = canonical.replace(' ', "_");

        match self.fetch_lead_image(&safe_title).await {
            Ok(Some(url)) => harvest.urls.push(url),
            Ok(None) => {
                tracing::debug!(title = %canonical, "No lead image in page summary");
            }
            Err(e) => harvest.summary_error = Some(e),
        }

        match self.fetch_article_images(&safe_title).await {
            Ok(urls) => {
                for url in urls {
                    if !harvest.urls.contains(&url) {
                        harvest.urls.push(url);
                    }
                }
            }
            Err(e) => harvest.scrape_error = Some(e),
        }

        harvest.urls.truncate(MAX_IMAGES);
        harvest
    }

    /// Query the structured page-summary endpoint for the lead image,
    /// preferring the full-resolution reference over the thumbnail.
    async fn fetch_lead_image(&self, safe_title: &str) -> Result<Option<String>, WikiFetchError> {
        let url = format!("{}/api/rest_v1/page/summary/{}", self.api_base, safe_title);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if !response.status().is_success() {
            return Err(WikiFetchError::Status(response.status()));
        }

        let summary: PageSummary = response
            .json()
            .await
            .map_err(|e| WikiFetchError::Malformed(e.to_string()))?;

        Ok(summary
            .originalimage
            .map(|image| image.source)
            .or(summary.thumbnail.map(|image| image.source)))
    }

    /// Scrape the rendered article HTML for upload-host image references.
    async fn fetch_article_images(&self, safe_title: &str) -> Result<Vec<String>, WikiFetchError> {
        let url = format!("{}/wiki/{}", self.api_base, safe_title);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if !response.status().is_success() {
            return Err(WikiFetchError::Status(response.status()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| WikiFetchError::Malformed(e.to_string()))?;

        Ok(extract_image_urls(&html))
    }
}

fn classify_transport_error(err: reqwest::Error) -> WikiFetchError {
    if err.is_timeout() {
        WikiFetchError::Timeout
    } else {
        WikiFetchError::Http(err.to_string())
    }
}

/// Pull upload-host image sources out of article HTML, keeping only
/// raster formats, in document order.
fn extract_image_urls(html: &str) -> Vec<String> {
    UPLOAD_SRC
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .filter(|url| has_raster_extension(url))
        .collect()
}

fn has_raster_extension(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    RASTER_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    originalimage: Option<ImageRef>,
    #[serde(default)]
    thumbnail: Option<ImageRef>,
}

#[derive(Debug, Deserialize)]
struct ImageRef {
    source: String,
}
