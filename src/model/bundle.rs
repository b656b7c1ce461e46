use serde::{Deserialize, Serialize};

use super::content::{Attachment, Author, Page, Post};
use super::menu::NavMenu;
use super::term::{Category, Tag};

/// Everything one parse produced, cross-referenced and ready for planning.
///
/// Re-parsing builds a new bundle from scratch; there is no incremental
/// update path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportBundle {
    pub tags: Vec<Tag>,
    pub categories: Vec<Category>,
    pub posts: Vec<Post>,
    pub pages: Vec<Page>,
    pub authors: Vec<Author>,
    pub attachments: Vec<Attachment>,
    pub menus: Vec<NavMenu>,
}

/// Per-kind record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BundleCounts {
    pub tags: usize,
    pub categories: usize,
    pub posts: usize,
    pub pages: usize,
    pub authors: usize,
    pub attachments: usize,
    pub menus: usize,
    pub menu_items: usize,
}

impl ImportBundle {
    pub fn tag_by_slug(&self, slug: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.slug == slug)
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn post_by_id(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.entry.id == id)
    }

    pub fn page_by_id(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.entry.id == id)
    }

    pub fn attachment_by_id(&self, id: &str) -> Option<&Attachment> {
        self.attachments.iter().find(|a| a.id == id)
    }

    /// Ids of the categories whose parent slug is `slug`.
    ///
    /// Scans every category; term counts stay small enough for that.
    pub fn child_category_ids(&self, slug: &str) -> Vec<String> {
        if slug.is_empty() {
            return Vec::new();
        }
        self.categories
            .iter()
            .filter(|c| c.parent == slug)
            .map(|c| c.id.clone())
            .collect()
    }

    pub fn counts(&self) -> BundleCounts {
        BundleCounts {
            tags: self.tags.len(),
            categories: self.categories.len(),
            posts: self.posts.len(),
            pages: self.pages.len(),
            authors: self.authors.len(),
            attachments: self.attachments.len(),
            menus: self.menus.len(),
            menu_items: self.menus.iter().map(|m| m.items.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts() == BundleCounts::default()
    }
}
