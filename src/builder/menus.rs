//! Menu and menu item drafts.

use serde::Serialize;
use tracing::debug;

use super::targets::{TargetIndex, TargetKind};
use crate::model::{ImportBundle, MenuTarget, NavMenu, NavMenuItem};

/// A menu item target after resolution against the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedTarget {
    /// A record the import creates (or already created), by kind and name.
    Ref { kind: TargetKind, name: String },
    /// A plain link.
    Href { url: String },
    /// The typed target is not in the bundle; the item links nowhere.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub id: String,
    pub display_name: String,
    pub priority: i64,
    /// Ids of the items whose parent is this item.
    pub children: Vec<String>,
    pub target: ResolvedTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDraft {
    pub id: String,
    pub display_name: String,
    /// Ids of every item of the menu, in menu order.
    pub items: Vec<String>,
}

/// Menu item and menu drafts of a bundle.
///
/// Items must be created before the menus listing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuDrafts {
    pub items: Vec<MenuItemDraft>,
    pub menus: Vec<MenuDraft>,
}

pub fn menu_drafts(bundle: &ImportBundle, targets: &TargetIndex) -> MenuDrafts {
    let mut drafts = MenuDrafts::default();

    for menu in &bundle.menus {
        drafts.items.extend(
            menu.items
                .iter()
                .map(|item| menu_item_draft(bundle, targets, menu, item)),
        );
        drafts.menus.push(MenuDraft {
            id: menu.id.clone(),
            display_name: menu.name.clone(),
            items: menu.item_ids(),
        });
    }

    drafts
}

fn menu_item_draft(
    bundle: &ImportBundle,
    targets: &TargetIndex,
    menu: &NavMenu,
    item: &NavMenuItem,
) -> MenuItemDraft {
    let (target, target_title) = resolve_target(bundle, targets, &item.target);
    if target == ResolvedTarget::Unresolved {
        debug!(item = %item.id, target = ?item.target, "menu item target not in bundle");
    }

    let display_name = if item.name.is_empty() {
        target_title.unwrap_or_default()
    } else {
        item.name.clone()
    };

    MenuItemDraft {
        id: item.id.clone(),
        display_name,
        priority: item.order.trim().parse().unwrap_or(0),
        children: menu.child_ids(&item.id),
        target,
    }
}

/// Resolves a target and returns the title of the record it points at.
fn resolve_target(
    bundle: &ImportBundle,
    targets: &TargetIndex,
    target: &MenuTarget,
) -> (ResolvedTarget, Option<String>) {
    let reference = |kind: TargetKind, id: &str| ResolvedTarget::Ref {
        kind,
        name: targets.name_for(kind, id),
    };

    match target {
        MenuTarget::Page(id) => match bundle.page_by_id(id) {
            Some(page) => (
                reference(TargetKind::Page, id),
                Some(page.entry.title.clone()),
            ),
            None => (ResolvedTarget::Unresolved, None),
        },
        MenuTarget::Post(id) => match bundle.post_by_id(id) {
            Some(post) => (
                reference(TargetKind::Post, id),
                Some(post.entry.title.clone()),
            ),
            None => (ResolvedTarget::Unresolved, None),
        },
        MenuTarget::Category(id) => match bundle.category_by_id(id) {
            Some(category) => (
                reference(TargetKind::Category, id),
                Some(category.name.clone()),
            ),
            None => (ResolvedTarget::Unresolved, None),
        },
        MenuTarget::Custom(url) => (ResolvedTarget::Href { url: url.clone() }, None),
    }
}
