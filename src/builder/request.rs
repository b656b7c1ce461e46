use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entity kinds in the order their requests must be executed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Tags,
    Categories,
    Posts,
    Pages,
    Authors,
    MenuItems,
    Menus,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Tags => "tags",
            EntityKind::Categories => "categories",
            EntityKind::Posts => "posts",
            EntityKind::Pages => "pages",
            EntityKind::Authors => "authors",
            EntityKind::MenuItems => "menu-items",
            EntityKind::Menus => "menus",
        }
    }

    /// All kinds, in execution order.
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Tags,
            EntityKind::Categories,
            EntityKind::Posts,
            EntityKind::Pages,
            EntityKind::Authors,
            EntityKind::MenuItems,
            EntityKind::Menus,
        ]
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pending create call: the destination resource and its body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateRequest {
    pub resource: String,
    pub payload: Value,
}

impl CreateRequest {
    pub fn new(resource: impl Into<String>, payload: Value) -> Self {
        Self {
            resource: resource.into(),
            payload,
        }
    }
}

/// Requests of one kind, in creation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestGroup {
    pub kind: EntityKind,
    pub requests: Vec<CreateRequest>,
}
