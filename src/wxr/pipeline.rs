//! Staged parse of a whole export.

use tracing::info;

use super::attachments::collect_attachments;
use super::authors::collect_authors;
use super::document::WxrDocument;
use super::items::ItemStage;
use super::menus::collect_menus;
use super::terms::TermStage;
use crate::error::Result;
use crate::model::{Attachment, ImportBundle};

/// Parses `xml` and builds its bundle.
///
/// Fails only when `xml` is not well-formed.
pub fn parse(xml: &str) -> Result<ImportBundle> {
    let doc = WxrDocument::parse(xml)?;
    Ok(parse_bundle(&doc))
}

/// Records that items are resolved against.
struct ReferenceStage {
    terms: TermStage,
    attachments: Vec<Attachment>,
}

impl ReferenceStage {
    fn collect(doc: &WxrDocument<'_>) -> Self {
        let terms = TermStage::collect(doc);
        let attachments = collect_attachments(doc);
        info!(
            tags = terms.tags.len(),
            categories = terms.categories.len(),
            menus = terms.menus.len(),
            attachments = attachments.len(),
            "collected terms and attachments"
        );
        Self { terms, attachments }
    }
}

/// Builds the bundle for an already parsed document.
///
/// Never mutates `doc` and never fails; missing fields become empty values
/// and unresolvable references are left out.
pub fn parse_bundle(doc: &WxrDocument<'_>) -> ImportBundle {
    let references = ReferenceStage::collect(doc);

    let items = ItemStage::collect(doc, &references.terms, &references.attachments);
    info!(
        posts = items.posts.len(),
        pages = items.pages.len(),
        "collected posts and pages"
    );

    let authors = collect_authors(doc);
    let menus = collect_menus(doc, &references.terms.menus);
    info!(
        authors = authors.len(),
        menus = menus.len(),
        "collected authors and menus"
    );

    let ReferenceStage { terms, attachments } = references;
    ImportBundle {
        tags: terms.tags,
        categories: terms.categories,
        posts: items.posts,
        pages: items.pages,
        authors,
        attachments,
        menus,
    }
}
