//! Taxonomy terms.

use serde::{Deserialize, Serialize};

/// A `post_tag` term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// A `category` term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Slug of the parent category; empty for a root category.
    pub parent: String,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent.is_empty()
    }
}
