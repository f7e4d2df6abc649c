//! Related-content matching by category and tag overlap.
//!
//! Given a reference document (the post being viewed), scores every other
//! document in the index by shared classification: a category match is the
//! strongest single signal, while each shared tag adds a smaller weight, so
//! several shared tags can outweigh a bare category match but a single one
//! cannot.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::index::ContentIndex;

/// Configuration for related-content matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RelatedConfig {
    /// Maximum number of related documents to return.
    pub max_results: usize,
    /// Score for sharing the reference document's category.
    pub category_weight: u32,
    /// Score per tag shared with the reference document.
    pub tag_weight: u32,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        RelatedConfig {
            max_results: 3,
            category_weight: 10,
            tag_weight: 3,
        }
    }
}

impl RelatedConfig {
    /// Create a configuration with the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of results.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// A related-content hit: a candidate document and its overlap score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedHit {
    /// The related document.
    pub document: Document,
    /// The overlap score.
    pub score: u32,
}

/// Finds topically related documents in a content index.
#[derive(Debug, Clone)]
pub struct RelatedMatcher<'a> {
    index: &'a ContentIndex,
    config: RelatedConfig,
}

impl<'a> RelatedMatcher<'a> {
    /// Create a matcher over the given index with default configuration.
    pub fn new(index: &'a ContentIndex) -> Self {
        Self::with_config(index, RelatedConfig::default())
    }

    /// Create a matcher with a custom configuration.
    pub fn with_config(index: &'a ContentIndex, config: RelatedConfig) -> Self {
        RelatedMatcher { index, config }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &RelatedConfig {
        &self.config
    }

    /// Find documents related to the reference document.
    ///
    /// The reference itself is excluded by id; candidates with no category
    /// match and no shared tags are dropped. Results are ordered by
    /// descending score, with ties keeping original index order. A
    /// reference with no category and no tags yields no results.
    pub fn related(&self, reference: &Document) -> Vec<RelatedHit> {
        let mut scored: Vec<RelatedHit> = self
            .index
            .documents()
            .iter()
            .filter(|candidate| candidate.id != reference.id)
            .filter_map(|candidate| {
                let score = self.score(reference, candidate);
                (score > 0).then(|| RelatedHit {
                    document: candidate.clone(),
                    score,
                })
            })
            .collect();

        // sort_by is stable, so equal scores keep index order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.config.max_results);
        scored
    }

    fn score(&self, reference: &Document, candidate: &Document) -> u32 {
        let mut score = 0;

        if let (Some(a), Some(b)) = (&reference.category, &candidate.category)
            && a == b
        {
            score += self.config.category_weight;
        }

        score + candidate.shared_tags(reference) as u32 * self.config.tag_weight
    }
}
