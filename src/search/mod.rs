//! Search system for ranking documents against free-text queries.

pub mod highlight;
pub mod scorer;
pub mod searcher;

pub use self::highlight::{HighlightConfig, Highlighter};
pub use self::scorer::{MatchScorer, ScoreWeights};
pub use self::searcher::Searcher;

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Default maximum number of search results.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// A search request: a free-text query plus a result cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The raw query text. May be empty or whitespace-only, in which case
    /// the search returns no results.
    pub query: String,
    /// Maximum number of hits to return.
    pub limit: usize,
}

impl SearchRequest {
    /// Create a request with the default result limit.
    pub fn new<S: Into<String>>(query: S) -> Self {
        SearchRequest {
            query: query.into(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Set the maximum number of hits to return.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// A search hit containing a document and its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matched document.
    pub document: Document,
    /// The relevance score.
    pub score: u32,
}

/// Search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// The search hits, highest relevance first.
    pub hits: Vec<SearchHit>,
    /// Total number of matching documents before the limit was applied.
    pub total_hits: usize,
    /// Maximum score in the results, 0 if there are none.
    pub max_score: u32,
}

impl SearchResults {
    /// Empty results, for queries that match nothing.
    pub fn empty() -> Self {
        SearchResults {
            hits: Vec::new(),
            total_hits: 0,
            max_score: 0,
        }
    }
}
