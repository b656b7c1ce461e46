//! Halo content API envelopes.
//!
//! Every payload is a `metadata` / `kind` / `apiVersion` / `spec` envelope;
//! `metadata.name` is the source id (the login for users), so later
//! references by id resolve on the destination side.

use serde_json::{json, Map, Value};

use super::authors::AuthorDraft;
use super::content::{ContentDraft, PostDraft};
use super::destination::Destination;
use super::menus::{MenuDraft, MenuItemDraft, ResolvedTarget};
use super::request::CreateRequest;
use super::targets::TargetKind;
use super::terms::{CategoryDraft, TagDraft};

const CONTENT_API_VERSION: &str = "content.halo.run/v1alpha1";
const CORE_API_VERSION: &str = "v1alpha1";
const CONTENT_GROUP: &str = "content.halo.run";

const TAGS: &str = "/apis/content.halo.run/v1alpha1/tags";
const CATEGORIES: &str = "/apis/content.halo.run/v1alpha1/categories";
const POSTS: &str = "/apis/api.console.halo.run/v1alpha1/posts";
const SINGLE_PAGES: &str = "/apis/api.console.halo.run/v1alpha1/singlepages";
const USERS: &str = "/api/v1alpha1/users";
const MENU_ITEMS: &str = "/api/v1alpha1/menuitems";
const MENUS: &str = "/api/v1alpha1/menus";

/// Destination for a Halo 2.x site.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaloDestination;

impl HaloDestination {
    pub fn new() -> Self {
        Self
    }

    fn target_kind(kind: TargetKind) -> &'static str {
        match kind {
            TargetKind::Page => "SinglePage",
            TargetKind::Post => "Post",
            TargetKind::Category => "Category",
        }
    }

    /// Spec fields shared by posts and single pages.
    fn content_spec(draft: &ContentDraft) -> Map<String, Value> {
        let spec = json!({
            "title": draft.title,
            "slug": draft.slug,
            "template": "",
            "deleted": draft.deleted,
            "publish": draft.publish,
            "publishTime": draft.publish_time,
            "pinned": draft.pinned,
            "allowComment": draft.allow_comment,
            "visible": "PUBLIC",
            "version": 1,
            "priority": 0,
            "excerpt": {
                "autoGenerate": false,
                "raw": draft.excerpt,
            },
            "htmlMetas": [],
            "owner": draft.owner,
        });
        match spec {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    fn content_body(draft: &ContentDraft) -> Value {
        json!({
            "raw": draft.content,
            "content": draft.content,
            "rawType": "HTML",
        })
    }
}

impl Destination for HaloDestination {
    fn tag(&self, draft: &TagDraft) -> CreateRequest {
        CreateRequest::new(
            TAGS,
            json!({
                "metadata": { "name": draft.id },
                "kind": "Tag",
                "apiVersion": CONTENT_API_VERSION,
                "spec": {
                    "displayName": draft.name,
                    "slug": draft.slug,
                },
            }),
        )
    }

    fn category(&self, draft: &CategoryDraft) -> CreateRequest {
        CreateRequest::new(
            CATEGORIES,
            json!({
                "metadata": { "name": draft.id },
                "kind": "Category",
                "apiVersion": CONTENT_API_VERSION,
                "spec": {
                    "displayName": draft.name,
                    "slug": draft.slug,
                    "priority": 0,
                    "children": draft.children,
                },
            }),
        )
    }

    fn post(&self, draft: &PostDraft) -> CreateRequest {
        let mut spec = Self::content_spec(&draft.content);
        spec.insert("categories".to_string(), json!(draft.categories));
        spec.insert("tags".to_string(), json!(draft.tags));
        spec.insert("cover".to_string(), json!(draft.cover));

        CreateRequest::new(
            POSTS,
            json!({
                "post": {
                    "spec": spec,
                    "apiVersion": CONTENT_API_VERSION,
                    "kind": "Post",
                    "metadata": { "name": draft.content.id },
                },
                "content": Self::content_body(&draft.content),
            }),
        )
    }

    fn page(&self, draft: &ContentDraft) -> CreateRequest {
        CreateRequest::new(
            SINGLE_PAGES,
            json!({
                "page": {
                    "spec": Self::content_spec(draft),
                    "apiVersion": CONTENT_API_VERSION,
                    "kind": "SinglePage",
                    "metadata": { "name": draft.id },
                },
                "content": Self::content_body(draft),
            }),
        )
    }

    fn author(&self, draft: &AuthorDraft) -> CreateRequest {
        CreateRequest::new(
            USERS,
            json!({
                "metadata": { "name": draft.login },
                "kind": "User",
                "apiVersion": CORE_API_VERSION,
                "spec": {
                    "displayName": draft.display_name,
                    "email": draft.email,
                    "disabled": false,
                },
            }),
        )
    }

    fn menu_item(&self, draft: &MenuItemDraft) -> CreateRequest {
        let mut spec = Map::new();
        spec.insert("displayName".to_string(), json!(draft.display_name));
        spec.insert("priority".to_string(), json!(draft.priority));
        spec.insert("children".to_string(), json!(draft.children));
        match &draft.target {
            ResolvedTarget::Ref { kind, name } => {
                spec.insert(
                    "targetRef".to_string(),
                    json!({
                        "group": CONTENT_GROUP,
                        "version": CORE_API_VERSION,
                        "kind": Self::target_kind(*kind),
                        "name": name,
                    }),
                );
            }
            ResolvedTarget::Href { url } => {
                spec.insert("href".to_string(), json!(url));
            }
            ResolvedTarget::Unresolved => {}
        }

        CreateRequest::new(
            MENU_ITEMS,
            json!({
                "kind": "MenuItem",
                "apiVersion": CORE_API_VERSION,
                "metadata": { "name": draft.id },
                "spec": spec,
            }),
        )
    }

    fn menu(&self, draft: &MenuDraft) -> CreateRequest {
        CreateRequest::new(
            MENUS,
            json!({
                "kind": "Menu",
                "apiVersion": CORE_API_VERSION,
                "metadata": { "name": draft.id },
                "spec": {
                    "displayName": draft.display_name,
                    "menuItems": draft.items,
                },
            }),
        )
    }
}
