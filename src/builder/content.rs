//! Post and page drafts.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::debug;

use crate::model::{Entry, ImportBundle};

/// Fields shared by post and page creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDraft {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub deleted: bool,
    pub publish: bool,
    /// ISO-8601 UTC timestamp, or empty.
    pub publish_time: String,
    pub pinned: bool,
    pub allow_comment: bool,
    pub excerpt: String,
    pub content: String,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    #[serde(flatten)]
    pub content: ContentDraft,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    /// Featured image URL.
    pub cover: String,
}

impl ContentDraft {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            slug: entry.title.clone(),
            deleted: entry.status == "trash",
            publish: entry.status == "publish",
            publish_time: publish_time(&entry.pub_date),
            pinned: entry.is_sticky == "1",
            // carried over as-is: a "closed" comment status allows comments
            allow_comment: entry.comment_status == "closed",
            excerpt: entry.excerpt.clone(),
            content: entry.content.clone(),
            owner: entry.creator.clone(),
        }
    }
}

pub fn post_drafts(bundle: &ImportBundle) -> Vec<PostDraft> {
    bundle
        .posts
        .iter()
        .map(|post| PostDraft {
            content: ContentDraft::from_entry(&post.entry),
            categories: post.category_ids(),
            tags: post.tag_ids(),
            cover: post.thumbnail.clone(),
        })
        .collect()
}

pub fn page_drafts(bundle: &ImportBundle) -> Vec<ContentDraft> {
    bundle
        .pages
        .iter()
        .map(|page| ContentDraft::from_entry(&page.entry))
        .collect()
}

/// Converts an RSS `pubDate` (RFC 2822) to `YYYY-MM-DDTHH:MM:SS.sssZ`.
///
/// Empty or unparsable dates (WordPress writes `-0001` years for never
/// published drafts) give an empty string.
pub fn publish_time(pub_date: &str) -> String {
    let pub_date = pub_date.trim();
    if pub_date.is_empty() {
        return String::new();
    }

    match DateTime::parse_from_rfc2822(pub_date) {
        Ok(date) => date
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        Err(err) => {
            debug!(%pub_date, error = %err, "unparsable pubDate; leaving publish time empty");
            String::new()
        }
    }
}
