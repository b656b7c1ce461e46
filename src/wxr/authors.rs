use std::collections::HashSet;

use tracing::debug;

use super::decode::decode_component;
use super::document::WxrDocument;
use super::names::{WP_AUTHOR, WP_AUTHOR_DISPLAY_NAME, WP_AUTHOR_EMAIL, WP_AUTHOR_LOGIN};
use crate::model::Author;

/// Every `wp:author`, first occurrence per login.
pub(crate) fn collect_authors(doc: &WxrDocument<'_>) -> Vec<Author> {
    let mut seen = HashSet::new();

    doc.elements(WP_AUTHOR)
        .map(|author| Author {
            login: decode_component(&author.child_text(WP_AUTHOR_LOGIN)),
            email: decode_component(&author.child_text(WP_AUTHOR_EMAIL)),
            display_name: decode_component(&author.child_text(WP_AUTHOR_DISPLAY_NAME)),
        })
        .filter(|author| {
            let first = seen.insert(author.login.clone());
            if !first {
                debug!(login = %author.login, "duplicate author login; keeping the first");
            }
            first
        })
        .collect()
}
