//! WordPress eXtended RSS (WXR) parser.
//!
//! Turns an export into an [`ImportBundle`]. The document is parsed once
//! into a read-only tree, then scanned in stages:
//!
//! 1. references: taxonomy terms and attachments
//! 2. items: posts and pages, resolved against stage 1
//! 3. authors and navigation menus
//!
//! Stage 2 only starts after stage 1 is complete, since posts look up
//! their categories, tags and featured image in it.

mod attachments;
mod authors;
mod decode;
mod document;
mod items;
mod menus;
pub mod names;
mod pipeline;
mod terms;

pub use decode::decode_component;
pub use document::{Element, QName, WxrDocument};
pub use pipeline::{parse, parse_bundle};

#[cfg(test)]
mod menus_test;
#[cfg(test)]
mod proptests;
