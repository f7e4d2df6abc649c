//! # Waypost
//!
//! A lightweight in-memory content search and recommendation library for
//! static sites.
//!
//! ## Features
//!
//! - Immutable, validated content index built once and shared by readers
//! - Autocomplete-style search ranking over titles, descriptions, and
//!   category names
//! - Related-content matching by category and tag overlap
//! - Scroll-position tracking for navigation highlights
//! - HTML heading extraction and reading-time estimation for articles

pub mod cli;
pub mod content;
pub mod document;
pub mod error;
pub mod index;
pub mod nav;
pub mod related;
pub mod search;

pub mod prelude {
    pub use crate::document::{Category, Document, DocumentBuilder, DocumentKind, Tag, Taxonomy};
    pub use crate::error::{Result, WaypostError};
    pub use crate::index::{ContentIndex, ContentIndexBuilder};
    pub use crate::related::{RelatedConfig, RelatedMatcher};
    pub use crate::search::{SearchRequest, SearchResults, Searcher};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
