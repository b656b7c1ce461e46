//! Tests for the navigation menu pass.

use super::document::WxrDocument;
use super::menus::collect_menus;
use super::terms::TermStage;
use crate::model::{MenuTarget, NavMenu};
use crate::test_support::{ItemFixture, WxrFixture};

fn collect(xml: &str) -> Vec<NavMenu> {
    let doc = WxrDocument::parse(xml).unwrap();
    let terms = TermStage::collect(&doc);
    collect_menus(&doc, &terms.menus)
}

fn typed_item(id: &str, order: &str, object: &str, object_id: &str) -> ItemFixture {
    ItemFixture::menu_item(id, "main", order)
        .meta("_menu_item_type", "post_type")
        .meta("_menu_item_menu_item_parent", "0")
        .meta("_menu_item_object", object)
        .meta("_menu_item_object_id", object_id)
}

#[test]
fn attaches_items_to_their_menu_in_document_order() {
    let xml = WxrFixture::new()
        .nav_menu("2", "main", "Main")
        .nav_menu("3", "footer", "Footer")
        .item(typed_item("21", "2", "page", "7"))
        .item(ItemFixture::menu_item("30", "footer", "1"))
        .item(typed_item("20", "1", "post", "8"))
        .build();

    let menus = collect(&xml);

    assert_eq!(menus.len(), 2);
    assert_eq!(menus[0].id, "2");
    assert_eq!(menus[0].name, "Main");
    assert_eq!(menus[0].item_ids(), vec!["21", "20"]);
    assert_eq!(menus[0].items[0].order, "2");
    assert_eq!(menus[1].item_ids(), vec!["30"]);
}

#[test]
fn reads_typed_and_custom_targets() {
    let xml = WxrFixture::new()
        .nav_menu("2", "main", "Main")
        .item(typed_item("20", "1", "page", "7").title("About us"))
        .item(typed_item("21", "2", "post", "8"))
        .item(typed_item("22", "3", "category", "1"))
        .item(
            ItemFixture::menu_item("23", "main", "4")
                .title("Docs")
                .meta("_menu_item_type", "custom")
                .meta("_menu_item_object", "custom")
                .meta("_menu_item_object_id", "23")
                .meta("_menu_item_url", "https://docs.example.com"),
        )
        .build();

    let menus = collect(&xml);
    let items = &menus[0].items;

    assert_eq!(items[0].target, MenuTarget::Page("7".to_string()));
    assert_eq!(items[0].name, "About us");
    assert_eq!(items[1].target, MenuTarget::Post("8".to_string()));
    assert_eq!(items[1].name, "");
    assert_eq!(items[2].target, MenuTarget::Category("1".to_string()));
    assert_eq!(
        items[3].target,
        MenuTarget::Custom("https://docs.example.com".to_string())
    );
}

#[test]
fn unknown_object_kinds_fall_back_to_custom() {
    let xml = WxrFixture::new()
        .nav_menu("2", "main", "Main")
        .item(
            typed_item("20", "1", "post_tag", "5")
                .meta("_menu_item_url", ""),
        )
        .build();

    let menus = collect(&xml);

    assert_eq!(menus[0].items[0].target, MenuTarget::Custom(String::new()));
}

#[test]
fn parent_zero_means_top_level() {
    let xml = WxrFixture::new()
        .nav_menu("2", "main", "Main")
        .item(typed_item("20", "1", "page", "7"))
        .item(
            ItemFixture::menu_item("21", "main", "2")
                .meta("_menu_item_menu_item_parent", "20")
                .meta("_menu_item_object", "custom")
                .meta("_menu_item_url", "/child"),
        )
        .build();

    let menus = collect(&xml);
    let menu = &menus[0];

    assert_eq!(menu.items[0].parent, "");
    assert_eq!(menu.items[1].parent, "20");
    assert_eq!(menu.child_ids("20"), vec!["21"]);
}

#[test]
fn items_of_unknown_menus_are_dropped() {
    let xml = WxrFixture::new()
        .nav_menu("2", "main", "Main")
        .item(ItemFixture::menu_item("20", "ghost", "1"))
        .item(ItemFixture::new("nav_menu_item", "21"))
        .build();

    let menus = collect(&xml);

    assert_eq!(menus.len(), 1);
    assert!(menus[0].items.is_empty());
}

#[test]
fn menu_slugs_are_percent_decoded() {
    let xml = WxrFixture::new()
        .nav_menu("2", "%e4%b8%bb", "%e4%b8%bb")
        .item(ItemFixture::menu_item("20", "%e4%b8%bb", "1"))
        .build();

    let menus = collect(&xml);

    assert_eq!(menus[0].name, "主");
    assert_eq!(menus[0].item_ids(), vec!["20"]);
}
