//! Navigation menu pass.

use tracing::debug;

use super::decode::decode_component;
use super::document::{Element, WxrDocument};
use super::names::{meta_key, post_type, taxonomy, CATEGORY, TITLE, WP_MENU_ORDER, WP_POST_ID};
use super::terms::MenuTerm;
use crate::model::{MenuTarget, NavMenu, NavMenuItem};

/// Builds one menu per `nav_menu` term and attaches `nav_menu_item` items to
/// it through their `nav_menu` category element.
///
/// Items keep document order. Items naming a menu that has no term are
/// dropped.
pub(crate) fn collect_menus(doc: &WxrDocument<'_>, terms: &[MenuTerm]) -> Vec<NavMenu> {
    let mut menus: Vec<NavMenu> = terms
        .iter()
        .map(|term| NavMenu {
            id: term.id.clone(),
            name: term.name.clone(),
            items: Vec::new(),
        })
        .collect();

    for item in doc.items_of_type(post_type::NAV_MENU_ITEM) {
        let menu_slug = menu_slug(item);
        let position = terms.iter().position(|term| term.slug == menu_slug);
        let nav_item = read_menu_item(item);

        match position.and_then(|i| menus.get_mut(i)) {
            Some(menu) => menu.items.push(nav_item),
            None => debug!(item = %nav_item.id, menu = %menu_slug, "menu item for unknown menu; skipping"),
        }
    }

    menus
}

fn menu_slug(item: Element<'_, '_>) -> String {
    item.children(CATEGORY)
        .find(|term| term.attribute("domain") == taxonomy::NAV_MENU)
        .map(|term| decode_component(term.attribute("nicename")))
        .unwrap_or_default()
}

fn read_menu_item(item: Element<'_, '_>) -> NavMenuItem {
    let meta = |key: &str| item.meta_value(key).unwrap_or_default();

    let parent = match meta(meta_key::MENU_ITEM_PARENT) {
        parent if parent == "0" => String::new(),
        parent => parent,
    };

    let object_id = meta(meta_key::MENU_ITEM_OBJECT_ID);
    let target = match meta(meta_key::MENU_ITEM_OBJECT).as_str() {
        "page" => MenuTarget::Page(object_id),
        "post" => MenuTarget::Post(object_id),
        "category" => MenuTarget::Category(object_id),
        _ => MenuTarget::Custom(meta(meta_key::MENU_ITEM_URL)),
    };

    NavMenuItem {
        id: item.child_text(WP_POST_ID),
        name: item.child_text(TITLE),
        order: item.child_text(WP_MENU_ORDER),
        parent,
        target,
    }
}
