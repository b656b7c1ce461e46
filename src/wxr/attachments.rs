//! Attachment pre-pass.

use super::document::WxrDocument;
use super::names::{meta_key, post_type, CONTENT_ENCODED, WP_ATTACHMENT_URL, WP_POST_ID};
use crate::model::Attachment;

/// Every `attachment` item, including ones without a URL.
pub(crate) fn collect_attachments(doc: &WxrDocument<'_>) -> Vec<Attachment> {
    doc.items_of_type(post_type::ATTACHMENT)
        .map(|item| Attachment {
            id: item.child_text(WP_POST_ID),
            url: item.child_text(WP_ATTACHMENT_URL),
            description: item.child_text(CONTENT_ENCODED),
            alt: item.meta_value(meta_key::IMAGE_ALT).unwrap_or_default(),
        })
        .collect()
}
