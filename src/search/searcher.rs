//! Searcher implementation for executing queries against a content index.

use crate::index::ContentIndex;
use crate::search::scorer::{MatchScorer, ScoreWeights};
use crate::search::{SearchHit, SearchRequest, SearchResults};

/// A searcher that ranks index documents against free-text queries.
///
/// Searching is a pure read: the searcher borrows the index and never
/// mutates it, so any number of searchers can share one index.
#[derive(Debug, Clone)]
pub struct Searcher<'a> {
    index: &'a ContentIndex,
    weights: ScoreWeights,
}

impl<'a> Searcher<'a> {
    /// Create a searcher over the given index with default score weights.
    pub fn new(index: &'a ContentIndex) -> Self {
        Searcher {
            index,
            weights: ScoreWeights::default(),
        }
    }

    /// Override the score weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The index this searcher reads from.
    pub fn index(&self) -> &ContentIndex {
        self.index
    }

    /// Execute a search request.
    ///
    /// Empty or whitespace-only queries return empty results rather than
    /// the whole index. Hits are ordered by descending score; documents
    /// with equal scores keep their original index order.
    pub fn search(&self, request: &SearchRequest) -> SearchResults {
        let scorer = MatchScorer::with_weights(&request.query, self.weights);
        if scorer.is_empty() {
            return SearchResults::empty();
        }

        let taxonomy = self.index.taxonomy();
        let mut scored: Vec<SearchHit> = self
            .index
            .documents()
            .iter()
            .filter_map(|doc| {
                let score = scorer.score(doc, taxonomy);
                (score > 0).then(|| SearchHit {
                    document: doc.clone(),
                    score,
                })
            })
            .collect();

        // sort_by is stable, so equal scores keep index order
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        let total_hits = scored.len();
        let max_score = scored.first().map(|hit| hit.score).unwrap_or(0);
        scored.truncate(request.limit);

        SearchResults {
            hits: scored,
            total_hits,
            max_score,
        }
    }
}
