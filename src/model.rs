//! Normalized records parsed out of a WXR export.
//!
//! Every field has an explicit default so a sparsely populated export still
//! produces complete records. Identifiers are the export's own ids, kept as
//! opaque strings.

mod bundle;
mod content;
mod menu;
mod term;

pub use bundle::{BundleCounts, ImportBundle};
pub use content::{Attachment, Author, Entry, Page, Post};
pub use menu::{MenuTarget, NavMenu, NavMenuItem};
pub use term::{Category, Tag};
