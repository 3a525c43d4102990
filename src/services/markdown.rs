//! Markdown cleaning for generated articles.
//!
//! The model is instructed not to emit markdown but occasionally does
//! anyway. These rules strip the common artifacts in a fixed order; they
//! are deliberately heuristic and do not attempt a full markdown parse.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"#+\s*").unwrap());
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[-*]\s*").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Strip markdown artifacts from generated text.
///
/// Rules apply in order: bold markers, double-underscore emphasis, heading
/// markers, leading bullet markers, blank-line runs collapsed to one blank
/// line, then a whole-text trim. Applying the function twice yields the
/// same result as applying it once.
pub fn clean_markdown(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = EMPHASIS.replace_all(&text, "$1");
    let text = HEADING.replace_all(&text, "");
    let text = BULLET.replace_all(&text, "");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}
