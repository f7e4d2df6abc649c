//! Article content utilities: heading extraction and reading time.
//!
//! Blog post bodies are stored as HTML. These helpers pull `<h2>`/`<h3>`
//! headings out for table-of-contents rendering, assign them stable slug
//! ids for anchor links, and estimate reading time. Extracted headings
//! double as the section list for [`crate::nav`] tracking within a post.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Words per minute used for reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

lazy_static! {
    static ref HEADING_RE: Regex =
        Regex::new(r"(?i)<h([2-3])(?:[^>]*)>([^<]+)</h[2-3]>").unwrap();
    static ref NON_ALNUM_RE: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// A heading extracted from article HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Slug id for anchor links.
    pub id: String,
    /// Heading text.
    pub text: String,
    /// Heading level (2 or 3).
    pub level: u8,
}

/// Turn heading text into a slug id: lowercase, with runs of
/// non-alphanumeric characters collapsed to single hyphens.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Extract `<h2>` and `<h3>` headings from HTML content.
pub fn extract_headings(html: &str) -> Vec<Heading> {
    HEADING_RE
        .captures_iter(html)
        .map(|caps| {
            let level = caps[1].parse::<u8>().unwrap_or(2);
            let text = caps[2].trim().to_string();
            Heading {
                id: slugify(&text),
                text,
                level,
            }
        })
        .collect()
}

/// Rewrite HTML content so every `<h2>`/`<h3>` carries its slug id,
/// enabling table-of-contents anchor links.
pub fn add_heading_ids(html: &str) -> String {
    HEADING_RE
        .replace_all(html, |caps: &regex::Captures| {
            let level = &caps[1];
            let text = caps[2].trim();
            format!("<h{level} id=\"{}\">{text}</h{level}>", slugify(text))
        })
        .into_owned()
}

/// Estimate reading time in minutes at [`WORDS_PER_MINUTE`], minimum 1.
pub fn reading_time(text: &str) -> u32 {
    let words = text.unicode_words().count();
    (words.div_ceil(WORDS_PER_MINUTE)).max(1) as u32
}
