//! Posts, pages, authors and media attachments.

use serde::{Deserialize, Serialize};

use super::term::{Category, Tag};

/// Scalar fields shared by posts and pages, copied verbatim from the item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub title: String,
    /// RFC 2822 `pubDate` of the RSS item.
    pub pub_date: String,
    /// `wp:post_date`, site-local `YYYY-MM-DD HH:MM:SS`.
    pub post_date: String,
    pub description: String,
    pub content: String,
    pub excerpt: String,
    pub comment_status: String,
    pub ping_status: String,
    pub post_name: String,
    /// `publish`, `draft`, `trash` (other WordPress statuses are kept as-is).
    pub status: String,
    /// `"0"` or `"1"`.
    pub is_sticky: String,
    /// Author login.
    pub creator: String,
}

/// A `post` item with its taxonomy and featured image resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(flatten)]
    pub entry: Entry,
    /// Only categories that resolved against the bundle.
    pub categories: Vec<Category>,
    /// Only tags that resolved against the bundle.
    pub tags: Vec<Tag>,
    /// Featured image URL, empty when there is none.
    pub thumbnail: String,
}

impl Post {
    pub fn category_ids(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.id.clone()).collect()
    }

    pub fn tag_ids(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.id.clone()).collect()
    }
}

/// A `page` item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(flatten)]
    pub entry: Entry,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub login: String,
    pub email: String,
    pub display_name: String,
}

/// An `attachment` item; only used to resolve featured images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    /// May be empty.
    pub url: String,
    pub description: String,
    pub alt: String,
}
