use super::authors::AuthorDraft;
use super::content::{ContentDraft, PostDraft};
use super::menus::{MenuDraft, MenuItemDraft};
use super::request::CreateRequest;
use super::terms::{CategoryDraft, TagDraft};

/// Payload construction for a destination system.
///
/// Drafts already carry every coercion and resolved reference; an
/// implementation only decides the resource and body shape. Swapping the
/// destination never touches the parser or the drafts.
pub trait Destination {
    fn tag(&self, draft: &TagDraft) -> CreateRequest;
    fn category(&self, draft: &CategoryDraft) -> CreateRequest;
    fn post(&self, draft: &PostDraft) -> CreateRequest;
    fn page(&self, draft: &ContentDraft) -> CreateRequest;
    fn author(&self, draft: &AuthorDraft) -> CreateRequest;
    fn menu_item(&self, draft: &MenuItemDraft) -> CreateRequest;
    fn menu(&self, draft: &MenuDraft) -> CreateRequest;
}
