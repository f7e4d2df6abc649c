//! Category and tag definitions for classifying documents.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A category definition with display properties.
///
/// Categories are the primary classification axis: each blog post belongs
/// to exactly one. The display `name` is also a search match target (the
/// ranker awards a bonus when a query matches it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// URL-friendly key, referenced by `Document::category`.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Short description for filter UIs.
    #[serde(default)]
    pub description: String,
}

/// A tag definition with display properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// URL-friendly key, referenced by `Document::tags`.
    pub key: String,
    /// Display name.
    pub name: String,
}

/// The set of categories and tags an index classifies documents under.
///
/// Lookup maps are built once at construction; the taxonomy is immutable
/// after that, like the index that owns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "TaxonomyData", into = "TaxonomyData")]
pub struct Taxonomy {
    categories: Vec<Category>,
    tags: Vec<Tag>,
    category_map: AHashMap<String, usize>,
    tag_map: AHashMap<String, usize>,
}

/// Serde surface for `Taxonomy`; the lookup maps are rebuilt on load.
#[derive(Serialize, Deserialize)]
struct TaxonomyData {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    tags: Vec<Tag>,
}

impl From<TaxonomyData> for Taxonomy {
    fn from(data: TaxonomyData) -> Self {
        Taxonomy::new(data.categories, data.tags)
    }
}

impl From<Taxonomy> for TaxonomyData {
    fn from(taxonomy: Taxonomy) -> Self {
        TaxonomyData {
            categories: taxonomy.categories,
            tags: taxonomy.tags,
        }
    }
}

impl Taxonomy {
    /// Create a taxonomy from category and tag definitions.
    ///
    /// Later definitions with a duplicate key shadow earlier ones in the
    /// lookup maps.
    pub fn new(categories: Vec<Category>, tags: Vec<Tag>) -> Self {
        let category_map = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.key.clone(), i))
            .collect();
        let tag_map = tags
            .iter()
            .enumerate()
            .map(|(i, t)| (t.key.clone(), i))
            .collect();
        Taxonomy {
            categories,
            tags,
            category_map,
            tag_map,
        }
    }

    /// Get all categories in definition order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get all tags in definition order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Look up a category by key.
    pub fn category(&self, key: &str) -> Option<&Category> {
        self.category_map.get(key).map(|&i| &self.categories[i])
    }

    /// Look up a tag by key.
    pub fn tag(&self, key: &str) -> Option<&Tag> {
        self.tag_map.get(key).map(|&i| &self.tags[i])
    }

    /// Get the display name for a category key, if defined.
    pub fn category_name(&self, key: &str) -> Option<&str> {
        self.category(key).map(|c| c.name.as_str())
    }
}
