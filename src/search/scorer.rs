//! Scoring implementation for ranking documents against a query.

use serde::{Deserialize, Serialize};

use crate::document::{Document, Taxonomy};

/// Score weights for the tiered match rules.
///
/// The tiers are exclusive (a title prefix match is not also scored as a
/// substring match); the category bonus is cumulative on top of whichever
/// tier applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Title equals the query exactly.
    pub exact_title: u32,
    /// Title starts with the query.
    pub title_prefix: u32,
    /// Title contains the query.
    pub title_substring: u32,
    /// Description contains the query (title did not match at all).
    pub description: u32,
    /// Category display name contains the query; added to the tier score.
    pub category_bonus: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            exact_title: 100,
            title_prefix: 80,
            title_substring: 60,
            description: 40,
            category_bonus: 20,
        }
    }
}

/// Scores a single document against a normalized query.
///
/// Queries are literal text: comparison is plain case-insensitive substring
/// matching, so punctuation and pattern metacharacters carry no special
/// meaning.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    query: String,
    weights: ScoreWeights,
}

impl MatchScorer {
    /// Create a scorer for a raw query string with default weights.
    ///
    /// The query is trimmed and lowercased once here; an empty result means
    /// every document scores 0.
    pub fn new(query: &str) -> Self {
        Self::with_weights(query, ScoreWeights::default())
    }

    /// Create a scorer with custom weights.
    pub fn with_weights(query: &str, weights: ScoreWeights) -> Self {
        MatchScorer {
            query: query.trim().to_lowercase(),
            weights,
        }
    }

    /// Whether the query normalized to nothing.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// The normalized query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Calculate the score for a document. Returns 0 when nothing matches.
    pub fn score(&self, document: &Document, taxonomy: &Taxonomy) -> u32 {
        if self.query.is_empty() {
            return 0;
        }

        let title = document.title.to_lowercase();
        let mut score = if title == self.query {
            self.weights.exact_title
        } else if title.starts_with(&self.query) {
            self.weights.title_prefix
        } else if title.contains(&self.query) {
            self.weights.title_substring
        } else {
            let description = document
                .description
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();
            if description.contains(&self.query) {
                self.weights.description
            } else {
                0
            }
        };

        // Bonus for matching the category display name
        if let Some(key) = &document.category
            && let Some(name) = taxonomy.category_name(key)
            && name.to_lowercase().contains(&self.query)
        {
            score += self.weights.category_bonus;
        }

        score
    }
}
