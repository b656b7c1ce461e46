//! Creation-request planning.
//!
//! Builders turn an [`ImportBundle`](crate::model::ImportBundle) into
//! ordered creation requests for a destination content system. They are
//! split in two steps:
//!
//! - drafts: per-kind records with every field coercion and cross-reference
//!   already applied (`*_drafts` functions);
//! - payloads: a [`Destination`] turns each draft into a [`CreateRequest`].
//!
//! Nothing here performs I/O. Executing the requests, retrying and
//! bookkeeping partial failures belong to the caller.

mod authors;
mod content;
mod destination;
mod halo;
mod menus;
mod plan;
mod request;
mod targets;
mod terms;

pub use authors::{author_drafts, AuthorDraft};
pub use content::{page_drafts, post_drafts, publish_time, ContentDraft, PostDraft};
pub use destination::Destination;
pub use halo::HaloDestination;
pub use menus::{menu_drafts, MenuDraft, MenuDrafts, MenuItemDraft, ResolvedTarget};
pub use plan::{ImportPlan, MenuRequests, RequestBuilder};
pub use request::{CreateRequest, EntityKind, RequestGroup};
pub use targets::{TargetIndex, TargetKind};
pub use terms::{category_drafts, tag_drafts, CategoryDraft, TagDraft};
