//! Taxonomy term pass.

use std::collections::HashSet;

use tracing::debug;

use super::decode::decode_component;
use super::document::{Element, QName, WxrDocument};
use super::names::{
    taxonomy, WP_CATEGORY, WP_CATEGORY_NICENAME, WP_CATEGORY_PARENT, WP_CAT_NAME, WP_TAG,
    WP_TAG_NAME, WP_TAG_SLUG, WP_TERM, WP_TERM_ID, WP_TERM_NAME, WP_TERM_PARENT, WP_TERM_SLUG,
    WP_TERM_TAXONOMY,
};
use crate::model::{Category, Tag};

/// A `nav_menu` term: the menu itself, before its items are attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MenuTerm {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Terms collected from the whole document.
#[derive(Debug, Default)]
pub(crate) struct TermStage {
    pub tags: Vec<Tag>,
    pub categories: Vec<Category>,
    pub menus: Vec<MenuTerm>,
    tag_ids: HashSet<String>,
    category_slugs: HashSet<String>,
}

impl TermStage {
    /// Reads `wp:term` elements, then the channel-level `wp:category` and
    /// `wp:tag` elements older exports use for the same data.
    pub fn collect(doc: &WxrDocument<'_>) -> Self {
        let mut stage = Self::default();

        for term in doc.elements(WP_TERM) {
            match term.child_text(WP_TERM_TAXONOMY).as_str() {
                taxonomy::POST_TAG => stage.push_tag(Tag {
                    id: term.child_text(WP_TERM_ID),
                    name: decoded(term, WP_TERM_NAME),
                    slug: decoded(term, WP_TERM_SLUG),
                }),
                taxonomy::CATEGORY => stage.push_category(Category {
                    id: term.child_text(WP_TERM_ID),
                    name: decoded(term, WP_TERM_NAME),
                    slug: decoded(term, WP_TERM_SLUG),
                    parent: decoded(term, WP_TERM_PARENT),
                }),
                taxonomy::NAV_MENU => stage.menus.push(MenuTerm {
                    id: term.child_text(WP_TERM_ID),
                    name: decoded(term, WP_TERM_NAME),
                    slug: decoded(term, WP_TERM_SLUG),
                }),
                _ => {}
            }
        }

        for category in doc.elements(WP_CATEGORY) {
            stage.push_category(Category {
                id: category.child_text(WP_TERM_ID),
                name: decoded(category, WP_CAT_NAME),
                slug: decoded(category, WP_CATEGORY_NICENAME),
                parent: decoded(category, WP_CATEGORY_PARENT),
            });
        }

        for tag in doc.elements(WP_TAG) {
            stage.push_tag(Tag {
                id: tag.child_text(WP_TERM_ID),
                name: decoded(tag, WP_TAG_NAME),
                slug: decoded(tag, WP_TAG_SLUG),
            });
        }

        stage
    }

    fn push_tag(&mut self, tag: Tag) {
        if self.tag_ids.insert(tag.id.clone()) {
            self.tags.push(tag);
        } else {
            debug!(id = %tag.id, slug = %tag.slug, "duplicate tag id; keeping the first");
        }
    }

    fn push_category(&mut self, category: Category) {
        if self.category_slugs.insert(category.slug.clone()) {
            self.categories.push(category);
        } else {
            debug!(id = %category.id, slug = %category.slug, "duplicate category slug; keeping the first");
        }
    }
}

fn decoded(element: Element<'_, '_>, name: QName) -> String {
    decode_component(&element.child_text(name))
}
