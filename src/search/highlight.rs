//! Text highlighting for search results.
//!
//! Wraps query occurrences in result titles and descriptions with an HTML
//! tag so UIs can emphasize the matched text. The query is always treated
//! as literal text via `regex::escape`, so user punctuation can never
//! inject pattern syntax.

use regex::RegexBuilder;

use crate::error::Result;

/// Configuration for text highlighting.
#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// HTML tag to wrap highlighted terms (e.g., "mark", "em", "strong").
    pub tag: String,
    /// CSS class to add to highlight tags.
    pub css_class: Option<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            tag: "mark".to_string(),
            css_class: None,
        }
    }
}

impl HighlightConfig {
    /// Create a new highlight configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML tag for highlighting.
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the CSS class added to highlight tags.
    pub fn css_class<S: Into<String>>(mut self, css_class: S) -> Self {
        self.css_class = Some(css_class.into());
        self
    }
}

/// Highlights literal query occurrences in display text.
#[derive(Debug)]
pub struct Highlighter {
    pattern: Option<regex::Regex>,
    open_tag: String,
    close_tag: String,
}

impl Highlighter {
    /// Create a highlighter for a raw query string.
    ///
    /// A query that trims to nothing produces a highlighter that returns
    /// text unchanged.
    pub fn new(query: &str, config: HighlightConfig) -> Result<Self> {
        let trimmed = query.trim();
        let pattern = if trimmed.is_empty() {
            None
        } else {
            let regex = RegexBuilder::new(&regex::escape(trimmed))
                .case_insensitive(true)
                .build()
                .map_err(|e| crate::error::WaypostError::query(e.to_string()))?;
            Some(regex)
        };

        let open_tag = match &config.css_class {
            Some(class) => format!("<{} class=\"{}\">", config.tag, class),
            None => format!("<{}>", config.tag),
        };
        let close_tag = format!("</{}>", config.tag);

        Ok(Highlighter {
            pattern,
            open_tag,
            close_tag,
        })
    }

    /// Wrap every occurrence of the query in the configured tag,
    /// preserving the original casing of the matched text.
    pub fn highlight(&self, text: &str) -> String {
        match &self.pattern {
            Some(regex) => regex
                .replace_all(text, format!("{}$0{}", self.open_tag, self.close_tag))
                .into_owned(),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_matches_preserving_case() {
        let highlighter = Highlighter::new("blog", HighlightConfig::default()).unwrap();
        assert_eq!(
            highlighter.highlight("My Blog posts about blogging"),
            "My <mark>Blog</mark> posts about <mark>blog</mark>ging"
        );
    }

    #[test]
    fn css_class_is_emitted() {
        let config = HighlightConfig::new().tag("em").css_class("hit");
        let highlighter = Highlighter::new("faq", config).unwrap();
        assert_eq!(
            highlighter.highlight("FAQ page"),
            "<em class=\"hit\">FAQ</em> page"
        );
    }

    #[test]
    fn punctuation_is_escaped() {
        let highlighter = Highlighter::new("c++ (tips)", HighlightConfig::default()).unwrap();
        assert_eq!(
            highlighter.highlight("Intro to C++ (tips)"),
            "Intro to <mark>C++ (tips)</mark>"
        );
    }

    #[test]
    fn empty_query_is_a_no_op() {
        let highlighter = Highlighter::new("   ", HighlightConfig::default()).unwrap();
        assert_eq!(highlighter.highlight("unchanged"), "unchanged");
    }
}
