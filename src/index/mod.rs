//! The content index: an immutable, validated collection of documents.
//!
//! The index is constructed once through [`ContentIndexBuilder`], which
//! enforces every invariant the query-time components rely on (unique ids,
//! non-empty titles, known taxonomy keys, deduplicated tags). After
//! `build()` the index never mutates, so concurrent readers need no
//! coordination.

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentKind, Taxonomy};
use crate::error::{Result, WaypostError};

/// The complete, immutable, in-memory collection of documents.
#[derive(Debug, Clone)]
pub struct ContentIndex {
    documents: Vec<Document>,
    taxonomy: Taxonomy,
    id_map: AHashMap<String, usize>,
    slug_map: AHashMap<String, usize>,
}

/// Serde surface for a content index file: taxonomy plus document list.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContentIndexData {
    /// Category and tag definitions.
    #[serde(default)]
    pub taxonomy: Taxonomy,
    /// Documents in index order.
    pub documents: Vec<Document>,
}

impl ContentIndex {
    /// Create a builder for constructing a content index.
    pub fn builder() -> ContentIndexBuilder {
        ContentIndexBuilder::new()
    }

    /// Load and validate an index from a JSON string.
    pub fn from_json_str(json: &str) -> Result<ContentIndex> {
        let data: ContentIndexData = serde_json::from_str(json)?;
        ContentIndexBuilder::new()
            .taxonomy(data.taxonomy)
            .add_documents(data.documents)
            .build()
    }

    /// Load and validate an index from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<ContentIndex> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the index back to its JSON file representation.
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let data = ContentIndexData {
            taxonomy: self.taxonomy.clone(),
            documents: self.documents.clone(),
        };
        let json = if pretty {
            serde_json::to_string_pretty(&data)?
        } else {
            serde_json::to_string(&data)?
        };
        Ok(json)
    }

    /// Get all documents in original index order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Get the taxonomy this index classifies documents under.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Get the number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Look up a document by id.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.id_map.get(id).map(|&i| &self.documents[i])
    }

    /// Look up a document by slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Document> {
        self.slug_map.get(slug).map(|&i| &self.documents[i])
    }

    /// Get all blog posts, newest first. Undated posts sort last, keeping
    /// their index order.
    pub fn posts(&self) -> Vec<&Document> {
        let mut posts: Vec<&Document> = self
            .documents
            .iter()
            .filter(|d| d.kind == DocumentKind::Blog)
            .collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Get all blog posts in a category, in index order.
    pub fn posts_by_category(&self, key: &str) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| d.kind == DocumentKind::Blog && d.category.as_deref() == Some(key))
            .collect()
    }

    /// Get all blog posts carrying a tag, in index order.
    pub fn posts_by_tag(&self, key: &str) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| d.kind == DocumentKind::Blog && d.has_tag(key))
            .collect()
    }

    /// Count blog posts per category, in taxonomy definition order.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        self.taxonomy
            .categories()
            .iter()
            .map(|c| (c.key.clone(), self.posts_by_category(&c.key).len()))
            .collect()
    }

    /// Get all slugs, for static route generation.
    pub fn slugs(&self) -> Vec<&str> {
        self.documents
            .iter()
            .filter_map(|d| d.slug.as_deref())
            .collect()
    }
}

/// A builder for constructing a validated content index.
#[derive(Debug, Default)]
pub struct ContentIndexBuilder {
    documents: Vec<Document>,
    taxonomy: Taxonomy,
}

impl ContentIndexBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the taxonomy for this index.
    pub fn taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    /// Add a document to the index.
    pub fn add_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    /// Add multiple documents to the index.
    pub fn add_documents<I: IntoIterator<Item = Document>>(mut self, documents: I) -> Self {
        self.documents.extend(documents);
        self
    }

    /// Validate and build the index.
    ///
    /// Rejects duplicate document ids and slugs, empty titles, and
    /// category/tag keys that are not defined in the taxonomy. Duplicate
    /// tags within a document are collapsed rather than rejected.
    pub fn build(self) -> Result<ContentIndex> {
        let mut id_map = AHashMap::with_capacity(self.documents.len());
        let mut slug_map = AHashMap::new();
        let mut documents = self.documents;

        for (pos, doc) in documents.iter_mut().enumerate() {
            if doc.title.trim().is_empty() {
                return Err(WaypostError::index(format!(
                    "document '{}' has an empty title",
                    doc.id
                )));
            }
            if id_map.insert(doc.id.clone(), pos).is_some() {
                return Err(WaypostError::index(format!(
                    "duplicate document id '{}'",
                    doc.id
                )));
            }
            if let Some(slug) = &doc.slug
                && slug_map.insert(slug.clone(), pos).is_some()
            {
                return Err(WaypostError::index(format!(
                    "duplicate document slug '{slug}'"
                )));
            }
            if let Some(category) = &doc.category
                && self.taxonomy.category(category).is_none()
            {
                return Err(WaypostError::index(format!(
                    "document '{}' references unknown category '{category}'",
                    doc.id
                )));
            }

            let mut seen = ahash::AHashSet::with_capacity(doc.tags.len());
            doc.tags.retain(|t| seen.insert(t.clone()));
            for tag in &doc.tags {
                if self.taxonomy.tag(tag).is_none() {
                    return Err(WaypostError::index(format!(
                        "document '{}' references unknown tag '{tag}'",
                        doc.id
                    )));
                }
            }
        }

        Ok(ContentIndex {
            documents,
            taxonomy: self.taxonomy,
            id_map,
            slug_map,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Category, Tag};

    fn taxonomy() -> Taxonomy {
        Taxonomy::new(
            vec![Category {
                key: "oral-health".to_string(),
                name: "Oral Health".to_string(),
                description: String::new(),
            }],
            vec![
                Tag {
                    key: "prevention".to_string(),
                    name: "Prevention".to_string(),
                },
                Tag {
                    key: "tips".to_string(),
                    name: "Tips".to_string(),
                },
            ],
        )
    }

    #[test]
    fn duplicate_id_rejected() {
        let result = ContentIndex::builder()
            .add_document(Document::builder("home").title("Home").build().unwrap())
            .add_document(Document::builder("home").title("Home 2").build().unwrap())
            .build();
        assert!(matches!(result, Err(WaypostError::Index(_))));
    }

    #[test]
    fn unknown_category_rejected() {
        let result = ContentIndex::builder()
            .taxonomy(taxonomy())
            .add_document(
                Document::builder("post")
                    .title("Post")
                    .kind(DocumentKind::Blog)
                    .category("nonexistent")
                    .build()
                    .unwrap(),
            )
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn lookup_by_id_and_slug() {
        let index = ContentIndex::builder()
            .taxonomy(taxonomy())
            .add_document(
                Document::builder("post-1")
                    .title("Brushing Basics")
                    .kind(DocumentKind::Blog)
                    .slug("brushing-basics")
                    .category("oral-health")
                    .tags(["prevention", "tips"])
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("post-1").unwrap().title, "Brushing Basics");
        assert_eq!(index.get_by_slug("brushing-basics").unwrap().id, "post-1");
        assert_eq!(index.category_counts(), vec![("oral-health".to_string(), 1)]);
    }

    #[test]
    fn json_round_trip() {
        let index = ContentIndex::builder()
            .taxonomy(taxonomy())
            .add_document(
                Document::builder("faq")
                    .title("FAQ")
                    .href("/#faq")
                    .kind(DocumentKind::Anchor)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let json = index.to_json_string(false).unwrap();
        let restored = ContentIndex::from_json_str(&json).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.get("faq").unwrap().kind, DocumentKind::Anchor);
    }
}
