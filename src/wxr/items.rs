//! Post and page pass.

use std::collections::HashMap;

use tracing::debug;

use super::decode::decode_component;
use super::document::{Element, WxrDocument};
use super::names::{
    meta_key, post_type, taxonomy, CATEGORY, CONTENT_ENCODED, DC_CREATOR, DESCRIPTION,
    EXCERPT_ENCODED, ITEM, PUB_DATE, TITLE, WP_COMMENT_STATUS, WP_IS_STICKY, WP_PING_STATUS,
    WP_POST_DATE, WP_POST_ID, WP_POST_NAME, WP_STATUS,
};
use super::terms::TermStage;
use crate::model::{Attachment, Category, Entry, Page, Post, Tag};

#[derive(Debug, Default)]
pub(crate) struct ItemStage {
    pub posts: Vec<Post>,
    pub pages: Vec<Page>,
}

/// Slug and id indexes over already collected references.
struct References<'r> {
    categories: HashMap<&'r str, &'r Category>,
    tags: HashMap<&'r str, &'r Tag>,
    attachments: HashMap<&'r str, &'r Attachment>,
}

impl<'r> References<'r> {
    fn new(terms: &'r TermStage, attachments: &'r [Attachment]) -> Self {
        // first occurrence wins, like a linear search would
        let mut index = Self {
            categories: HashMap::new(),
            tags: HashMap::new(),
            attachments: HashMap::new(),
        };
        for category in &terms.categories {
            index.categories.entry(category.slug.as_str()).or_insert(category);
        }
        for tag in &terms.tags {
            index.tags.entry(tag.slug.as_str()).or_insert(tag);
        }
        for attachment in attachments {
            index
                .attachments
                .entry(attachment.id.as_str())
                .or_insert(attachment);
        }
        index
    }
}

impl ItemStage {
    pub fn collect(doc: &WxrDocument<'_>, terms: &TermStage, attachments: &[Attachment]) -> Self {
        let refs = References::new(terms, attachments);
        let mut stage = Self::default();

        for item in doc.elements(ITEM) {
            match item.post_type().as_str() {
                post_type::POST => stage.posts.push(read_post(item, &refs)),
                post_type::PAGE => stage.pages.push(Page {
                    entry: read_entry(item),
                }),
                // attachments were read up front; menus have their own pass
                _ => {}
            }
        }

        stage
    }
}

fn read_entry(item: Element<'_, '_>) -> Entry {
    Entry {
        id: item.child_text(WP_POST_ID),
        title: item.child_text(TITLE),
        pub_date: item.child_text(PUB_DATE),
        post_date: item.child_text(WP_POST_DATE),
        description: item.child_text(DESCRIPTION),
        content: item.child_text(CONTENT_ENCODED),
        excerpt: item.child_text(EXCERPT_ENCODED),
        comment_status: item.child_text(WP_COMMENT_STATUS),
        ping_status: item.child_text(WP_PING_STATUS),
        post_name: item.child_text(WP_POST_NAME),
        status: item.child_text(WP_STATUS),
        is_sticky: item.child_text(WP_IS_STICKY),
        creator: item.child_text(DC_CREATOR),
    }
}

fn read_post(item: Element<'_, '_>, refs: &References<'_>) -> Post {
    let entry = read_entry(item);
    let mut categories = Vec::new();
    let mut tags = Vec::new();

    for term in item.children(CATEGORY) {
        let nicename = decode_component(term.attribute("nicename"));
        match term.attribute("domain") {
            taxonomy::CATEGORY => match refs.categories.get(nicename.as_str()) {
                Some(category) => categories.push((*category).clone()),
                None => debug!(post = %entry.id, %nicename, "unknown category; skipping"),
            },
            taxonomy::POST_TAG => match refs.tags.get(nicename.as_str()) {
                Some(tag) => tags.push((*tag).clone()),
                None => debug!(post = %entry.id, %nicename, "unknown tag; skipping"),
            },
            _ => {}
        }
    }

    let thumbnail = featured_image(item, refs, &entry.id);

    Post {
        entry,
        categories,
        tags,
        thumbnail,
    }
}

fn featured_image(item: Element<'_, '_>, refs: &References<'_>, post_id: &str) -> String {
    let Some(thumbnail_id) = item
        .meta_value(meta_key::THUMBNAIL_ID)
        .filter(|id| !id.is_empty())
    else {
        return String::new();
    };

    match refs.attachments.get(thumbnail_id.as_str()) {
        Some(attachment) => attachment.url.clone(),
        None => {
            debug!(post = %post_id, %thumbnail_id, "featured image attachment not found");
            String::new()
        }
    }
}
