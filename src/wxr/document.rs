//! Read-only query handle over a parsed export.

use roxmltree::{Document, Node, ParsingOptions};

use super::names::{WP_META_KEY, WP_META_VALUE, WP_POSTMETA, WP_POST_TYPE};
use crate::error::Result;

/// Element name as written in the export: an optional namespace prefix
/// plus a local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QName {
    prefix: Option<&'static str>,
    local: &'static str,
}

impl QName {
    /// Unprefixed (plain RSS) element.
    pub const fn plain(local: &'static str) -> Self {
        Self {
            prefix: None,
            local,
        }
    }

    pub const fn prefixed(prefix: &'static str, local: &'static str) -> Self {
        Self {
            prefix: Some(prefix),
            local,
        }
    }

    /// Element in the `wp:` namespace.
    pub const fn wp(local: &'static str) -> Self {
        Self::prefixed("wp", local)
    }

    pub fn local(&self) -> &'static str {
        self.local
    }

    fn matches(&self, node: &Node<'_, '_>) -> bool {
        if !node.is_element() {
            return false;
        }
        let tag = node.tag_name();
        if tag.name() != self.local {
            return false;
        }
        match (self.prefix, tag.namespace()) {
            (None, None) => true,
            (Some(prefix), Some(uri)) => node.lookup_prefix(uri) == Some(prefix),
            _ => false,
        }
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.prefix {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local),
            None => f.write_str(self.local),
        }
    }
}

/// A parsed WXR document.
///
/// Parsing is the only fallible step: a document that is not well-formed
/// XML is rejected here, before any record is read.
pub struct WxrDocument<'input> {
    doc: Document<'input>,
}

impl<'input> WxrDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(text, options)?;
        Ok(Self { doc })
    }

    /// Every element named `name`, in document order.
    pub fn elements<'a>(&'a self, name: QName) -> impl Iterator<Item = Element<'a, 'input>> {
        self.doc
            .descendants()
            .filter(move |node| name.matches(node))
            .map(Element::new)
    }

    /// Every `<item>` whose `wp:post_type` equals `post_type`.
    pub fn items_of_type<'a>(
        &'a self,
        post_type: &'static str,
    ) -> impl Iterator<Item = Element<'a, 'input>> {
        self.elements(super::names::ITEM)
            .filter(move |item| item.post_type() == post_type)
    }
}

/// An element of a [`WxrDocument`].
///
/// Missing children and attributes read as empty strings; the export format
/// is too inconsistently populated for anything stricter.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a, 'input: 'a> {
    node: Node<'a, 'input>,
}

impl<'a, 'input: 'a> Element<'a, 'input> {
    fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// Direct children named `name`.
    pub fn children(self, name: QName) -> impl Iterator<Item = Element<'a, 'input>> {
        self.node
            .children()
            .filter(move |node| name.matches(node))
            .map(Element::new)
    }

    pub fn child(self, name: QName) -> Option<Element<'a, 'input>> {
        self.children(name).next()
    }

    /// Text of the first child named `name`, or empty.
    pub fn child_text(self, name: QName) -> String {
        self.child(name).map(Element::text).unwrap_or_default()
    }

    /// Concatenated text of this element, CDATA included.
    pub fn text(self) -> String {
        self.node
            .descendants()
            .filter(|node| node.is_text())
            .filter_map(|node| node.text())
            .collect()
    }

    /// Attribute value, or empty when absent.
    pub fn attribute(self, name: &str) -> &'a str {
        self.node.attribute(name).unwrap_or_default()
    }

    pub fn post_type(self) -> String {
        self.child_text(WP_POST_TYPE)
    }

    /// Value of the `wp:postmeta` row keyed `key`.
    ///
    /// When a key repeats, the last row wins.
    pub fn meta_value(self, key: &str) -> Option<String> {
        self.children(WP_POSTMETA)
            .filter(|row| row.child_text(WP_META_KEY) == key)
            .last()
            .map(|row| row.child_text(WP_META_VALUE))
    }
}
