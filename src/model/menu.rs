//! Navigation menus.

use serde::{Deserialize, Serialize};

/// What a menu item points at, as written in the export.
///
/// Typed targets carry the source id of the record; nothing is resolved
/// here. Resolution happens when menu requests are built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "targetType", content = "target", rename_all = "lowercase")]
pub enum MenuTarget {
    Page(String),
    Post(String),
    Category(String),
    /// Direct URL.
    Custom(String),
}

impl Default for MenuTarget {
    fn default() -> Self {
        MenuTarget::Custom(String::new())
    }
}

impl MenuTarget {
    pub fn kind_str(&self) -> &'static str {
        match self {
            MenuTarget::Page(_) => "page",
            MenuTarget::Post(_) => "post",
            MenuTarget::Category(_) => "category",
            MenuTarget::Custom(_) => "custom",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenuItem {
    pub id: String,
    /// Label override; empty means "use the target's title".
    pub name: String,
    /// `wp:menu_order` as written.
    pub order: String,
    /// Id of the parent item in the same menu; empty for a top-level item.
    pub parent: String,
    #[serde(flatten)]
    pub target: MenuTarget,
}

impl NavMenuItem {
    pub fn is_top_level(&self) -> bool {
        self.parent.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenu {
    pub id: String,
    pub name: String,
    /// Items in document order.
    pub items: Vec<NavMenuItem>,
}

impl NavMenu {
    /// Items of this menu whose parent is `item_id`.
    ///
    /// Children are derived from the parent pointers every time; they are
    /// never stored on the item.
    pub fn children_of<'a>(&'a self, item_id: &'a str) -> impl Iterator<Item = &'a NavMenuItem> {
        self.items
            .iter()
            .filter(move |item| !item.parent.is_empty() && item.parent == item_id)
    }

    pub fn child_ids(&self, item_id: &str) -> Vec<String> {
        self.children_of(item_id).map(|item| item.id.clone()).collect()
    }

    pub fn item_ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }
}
