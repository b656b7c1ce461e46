//! Element names and well-known values used by WordPress exports.
//!
//! Prefixes are matched literally against the prefix the export binds to
//! each namespace, so `content:encoded` and `excerpt:encoded` stay distinct.

use super::document::QName;

pub const ITEM: QName = QName::plain("item");
pub const TITLE: QName = QName::plain("title");
pub const PUB_DATE: QName = QName::plain("pubDate");
pub const DESCRIPTION: QName = QName::plain("description");
pub const CATEGORY: QName = QName::plain("category");

pub const CONTENT_ENCODED: QName = QName::prefixed("content", "encoded");
pub const EXCERPT_ENCODED: QName = QName::prefixed("excerpt", "encoded");
pub const DC_CREATOR: QName = QName::prefixed("dc", "creator");

pub const WP_TERM: QName = QName::wp("term");
pub const WP_TERM_ID: QName = QName::wp("term_id");
pub const WP_TERM_TAXONOMY: QName = QName::wp("term_taxonomy");
pub const WP_TERM_SLUG: QName = QName::wp("term_slug");
pub const WP_TERM_PARENT: QName = QName::wp("term_parent");
pub const WP_TERM_NAME: QName = QName::wp("term_name");

pub const WP_CATEGORY: QName = QName::wp("category");
pub const WP_CATEGORY_NICENAME: QName = QName::wp("category_nicename");
pub const WP_CATEGORY_PARENT: QName = QName::wp("category_parent");
pub const WP_CAT_NAME: QName = QName::wp("cat_name");
pub const WP_TAG: QName = QName::wp("tag");
pub const WP_TAG_SLUG: QName = QName::wp("tag_slug");
pub const WP_TAG_NAME: QName = QName::wp("tag_name");

pub const WP_POST_ID: QName = QName::wp("post_id");
pub const WP_POST_DATE: QName = QName::wp("post_date");
pub const WP_POST_TYPE: QName = QName::wp("post_type");
pub const WP_POST_NAME: QName = QName::wp("post_name");
pub const WP_STATUS: QName = QName::wp("status");
pub const WP_IS_STICKY: QName = QName::wp("is_sticky");
pub const WP_COMMENT_STATUS: QName = QName::wp("comment_status");
pub const WP_PING_STATUS: QName = QName::wp("ping_status");
pub const WP_MENU_ORDER: QName = QName::wp("menu_order");
pub const WP_ATTACHMENT_URL: QName = QName::wp("attachment_url");
pub const WP_POSTMETA: QName = QName::wp("postmeta");
pub const WP_META_KEY: QName = QName::wp("meta_key");
pub const WP_META_VALUE: QName = QName::wp("meta_value");

pub const WP_AUTHOR: QName = QName::wp("author");
pub const WP_AUTHOR_LOGIN: QName = QName::wp("author_login");
pub const WP_AUTHOR_EMAIL: QName = QName::wp("author_email");
pub const WP_AUTHOR_DISPLAY_NAME: QName = QName::wp("author_display_name");

/// Values of `wp:post_type`.
pub mod post_type {
    pub const POST: &str = "post";
    pub const PAGE: &str = "page";
    pub const ATTACHMENT: &str = "attachment";
    pub const NAV_MENU_ITEM: &str = "nav_menu_item";
}

/// Values of `wp:term_taxonomy` and of the `domain` attribute on item
/// `<category>` elements.
pub mod taxonomy {
    pub const CATEGORY: &str = "category";
    pub const POST_TAG: &str = "post_tag";
    pub const NAV_MENU: &str = "nav_menu";
}

/// Keys of `wp:postmeta` rows.
pub mod meta_key {
    pub const THUMBNAIL_ID: &str = "_thumbnail_id";
    pub const IMAGE_ALT: &str = "_wp_attachment_image_alt";
    pub const MENU_ITEM_PARENT: &str = "_menu_item_menu_item_parent";
    pub const MENU_ITEM_OBJECT: &str = "_menu_item_object";
    pub const MENU_ITEM_OBJECT_ID: &str = "_menu_item_object_id";
    pub const MENU_ITEM_URL: &str = "_menu_item_url";
}
