//! Document structure for searchable site content.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypostError};

/// The kind of content a document represents.
///
/// Kind is used for display iconography and listing filters only;
/// it never participates in search or related-content scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A standalone page (home, contact, about).
    Page,
    /// An in-page anchor target on a landing page.
    Anchor,
    /// A legal page (privacy policy, terms of service).
    Legal,
    /// A blog post with full article metadata.
    Blog,
}

/// A document represents a single searchable/recommendable content unit.
///
/// Documents are immutable once added to a
/// [`ContentIndex`](crate::index::ContentIndex). Blog posts carry the full
/// metadata set (slug, date, author, read time); plain pages and anchors
/// typically only have a title, description, and href.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Stable unique identifier.
    pub id: String,
    /// Display title; the primary search match target. Always non-empty.
    pub title: String,
    /// Optional description or excerpt; the secondary search match target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Navigation target. Not used in scoring.
    pub href: String,
    /// The kind of content, for display purposes.
    pub kind: DocumentKind,
    /// Category key into the index taxonomy, if classified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Tag keys into the index taxonomy. Duplicates are collapsed at
    /// index-build time; order does not matter for scoring.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// URL-friendly slug for routing (blog posts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Publication date (blog posts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Author name (blog posts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Estimated reading time in minutes (blog posts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<u32>,
}

impl Document {
    /// Create a builder for constructing documents.
    pub fn builder<S: Into<String>>(id: S) -> DocumentBuilder {
        DocumentBuilder::new(id)
    }

    /// Check whether this document carries a specific tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Count the tags this document shares with another.
    pub fn shared_tags(&self, other: &Document) -> usize {
        self.tags.iter().filter(|t| other.has_tag(t)).count()
    }
}

/// A builder for constructing documents in a fluent manner.
///
/// `build()` enforces the document preconditions (non-empty title) so that
/// query-time code never has to re-validate.
#[derive(Debug)]
pub struct DocumentBuilder {
    id: String,
    title: String,
    description: Option<String>,
    href: String,
    kind: DocumentKind,
    category: Option<String>,
    tags: Vec<String>,
    slug: Option<String>,
    date: Option<NaiveDate>,
    author: Option<String>,
    read_time: Option<u32>,
}

impl DocumentBuilder {
    /// Create a new document builder for the given id.
    pub fn new<S: Into<String>>(id: S) -> Self {
        DocumentBuilder {
            id: id.into(),
            title: String::new(),
            description: None,
            href: String::new(),
            kind: DocumentKind::Page,
            category: None,
            tags: Vec::new(),
            slug: None,
            date: None,
            author: None,
            read_time: None,
        }
    }

    /// Set the display title.
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description/excerpt.
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the navigation target.
    pub fn href<S: Into<String>>(mut self, href: S) -> Self {
        self.href = href.into();
        self
    }

    /// Set the content kind.
    pub fn kind(mut self, kind: DocumentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the category key.
    pub fn category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add a tag key.
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tag keys.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the URL slug.
    pub fn slug<S: Into<String>>(mut self, slug: S) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set the publication date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the author name.
    pub fn author<S: Into<String>>(mut self, author: S) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the estimated reading time in minutes.
    pub fn read_time(mut self, minutes: u32) -> Self {
        self.read_time = Some(minutes);
        self
    }

    /// Build the document, validating preconditions.
    ///
    /// Duplicate tags are collapsed here so that tag sets are genuine sets
    /// by the time scoring sees them.
    pub fn build(self) -> Result<Document> {
        if self.id.is_empty() {
            return Err(WaypostError::document("document id must not be empty"));
        }
        if self.title.trim().is_empty() {
            return Err(WaypostError::document(format!(
                "document '{}' has an empty title",
                self.id
            )));
        }

        let mut tags = self.tags;
        let mut seen = ahash::AHashSet::with_capacity(tags.len());
        tags.retain(|t| seen.insert(t.clone()));

        Ok(Document {
            id: self.id,
            title: self.title,
            description: self.description,
            href: self.href,
            kind: self.kind,
            category: self.category,
            tags,
            slug: self.slug,
            date: self.date,
            author: self.author,
            read_time: self.read_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_empty_title() {
        let result = Document::builder("home").href("/").build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_collapses_duplicate_tags() {
        let doc = Document::builder("post-1")
            .title("Flossing Basics")
            .href("/blog/flossing-basics")
            .kind(DocumentKind::Blog)
            .tags(["prevention", "tips", "prevention"])
            .build()
            .unwrap();
        assert_eq!(doc.tags, vec!["prevention", "tips"]);
    }

    #[test]
    fn shared_tags_counts_overlap() {
        let a = Document::builder("a")
            .title("A")
            .tags(["prevention", "children", "tips"])
            .build()
            .unwrap();
        let b = Document::builder("b")
            .title("B")
            .tags(["tips", "prevention", "nutrition"])
            .build()
            .unwrap();
        assert_eq!(a.shared_tags(&b), 2);
    }
}
