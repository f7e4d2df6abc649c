//! Document module for site content.
//!
//! This module provides the document structure and the taxonomy
//! (categories and tags) that documents are classified under.

#[allow(clippy::module_inception)]
pub mod document;
pub mod taxonomy;

// Re-export commonly used types
pub use document::{Document, DocumentBuilder, DocumentKind};
pub use taxonomy::{Category, Tag, Taxonomy};
