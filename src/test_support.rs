//! WXR fixture builders shared by unit tests.

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0"
	xmlns:excerpt="http://wordpress.org/export/1.2/excerpt/"
	xmlns:content="http://purl.org/rss/1.0/modules/content/"
	xmlns:wfw="http://wellformedweb.org/CommentAPI/"
	xmlns:dc="http://purl.org/dc/elements/1.1/"
	xmlns:wp="http://wordpress.org/export/1.2/"
>
<channel>
	<title>Fixture Site</title>
	<link>https://example.com</link>
	<wp:wxr_version>1.2</wp:wxr_version>
"#;

const FOOTER: &str = "</channel>\n</rss>\n";

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Builds a WXR document piece by piece.
#[derive(Debug, Default)]
pub struct WxrFixture {
    body: String,
}

impl WxrFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, taxonomy: &str, id: &str, slug: &str, name: &str, parent: &str) -> Self {
        self.body.push_str(&format!(
            "\t<wp:term><wp:term_id>{}</wp:term_id><wp:term_taxonomy>{}</wp:term_taxonomy><wp:term_slug><![CDATA[{}]]></wp:term_slug><wp:term_parent><![CDATA[{}]]></wp:term_parent><wp:term_name><![CDATA[{}]]></wp:term_name></wp:term>\n",
            id, taxonomy, slug, parent, name
        ));
        self
    }

    pub fn category(self, id: &str, slug: &str, name: &str, parent: &str) -> Self {
        self.term("category", id, slug, name, parent)
    }

    pub fn tag(self, id: &str, slug: &str, name: &str) -> Self {
        self.term("post_tag", id, slug, name, "")
    }

    pub fn nav_menu(self, id: &str, slug: &str, name: &str) -> Self {
        self.term("nav_menu", id, slug, name, "")
    }

    /// Channel-level `<wp:category>` as written by older exports.
    pub fn legacy_category(mut self, id: &str, nicename: &str, name: &str, parent: &str) -> Self {
        self.body.push_str(&format!(
            "\t<wp:category><wp:term_id>{}</wp:term_id><wp:category_nicename><![CDATA[{}]]></wp:category_nicename><wp:category_parent><![CDATA[{}]]></wp:category_parent><wp:cat_name><![CDATA[{}]]></wp:cat_name></wp:category>\n",
            id, nicename, parent, name
        ));
        self
    }

    /// Channel-level `<wp:tag>` as written by older exports.
    pub fn legacy_tag(mut self, id: &str, slug: &str, name: &str) -> Self {
        self.body.push_str(&format!(
            "\t<wp:tag><wp:term_id>{}</wp:term_id><wp:tag_slug><![CDATA[{}]]></wp:tag_slug><wp:tag_name><![CDATA[{}]]></wp:tag_name></wp:tag>\n",
            id, slug, name
        ));
        self
    }

    pub fn author(mut self, login: &str, email: &str, display_name: &str) -> Self {
        self.body.push_str(&format!(
            "\t<wp:author><wp:author_id>1</wp:author_id><wp:author_login><![CDATA[{}]]></wp:author_login><wp:author_email><![CDATA[{}]]></wp:author_email><wp:author_display_name><![CDATA[{}]]></wp:author_display_name></wp:author>\n",
            login, email, display_name
        ));
        self
    }

    pub fn item(mut self, item: ItemFixture) -> Self {
        self.body.push_str(&item.to_xml());
        self
    }

    pub fn build(&self) -> String {
        format!("{HEADER}{}{FOOTER}", self.body)
    }
}

/// One `<item>`.
#[derive(Debug, Clone)]
pub struct ItemFixture {
    fields: Vec<(String, String)>,
    categories: Vec<(String, String)>,
    meta: Vec<(String, String)>,
}

impl ItemFixture {
    pub fn new(post_type: &str, id: &str) -> Self {
        Self {
            fields: vec![
                ("wp:post_id".to_string(), id.to_string()),
                ("wp:post_type".to_string(), post_type.to_string()),
            ],
            categories: Vec::new(),
            meta: Vec::new(),
        }
    }

    pub fn post(id: &str) -> Self {
        Self::new("post", id)
    }

    pub fn page(id: &str) -> Self {
        Self::new("page", id)
    }

    pub fn attachment(id: &str, url: &str) -> Self {
        Self::new("attachment", id).field("wp:attachment_url", url)
    }

    /// `nav_menu_item` in menu `menu_slug`.
    pub fn menu_item(id: &str, menu_slug: &str, order: &str) -> Self {
        Self::new("nav_menu_item", id)
            .field("wp:menu_order", order)
            .taxonomy("nav_menu", menu_slug)
    }

    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn title(self, title: &str) -> Self {
        self.field("title", title)
    }

    pub fn taxonomy(mut self, domain: &str, nicename: &str) -> Self {
        self.categories
            .push((domain.to_string(), nicename.to_string()));
        self
    }

    pub fn meta(mut self, key: &str, value: &str) -> Self {
        self.meta.push((key.to_string(), value.to_string()));
        self
    }

    fn to_xml(&self) -> String {
        let mut xml = String::from("\t<item>\n");
        for (name, value) in &self.fields {
            xml.push_str(&format!("\t\t<{name}><![CDATA[{value}]]></{name}>\n"));
        }
        for (domain, nicename) in &self.categories {
            xml.push_str(&format!(
                "\t\t<category domain=\"{}\" nicename=\"{}\"><![CDATA[{}]]></category>\n",
                escape(domain),
                escape(nicename),
                nicename
            ));
        }
        for (key, value) in &self.meta {
            xml.push_str(&format!(
                "\t\t<wp:postmeta><wp:meta_key><![CDATA[{key}]]></wp:meta_key><wp:meta_value><![CDATA[{value}]]></wp:meta_value></wp:postmeta>\n"
            ));
        }
        xml.push_str("\t</item>\n");
        xml
    }
}

/// The example export from the crate's end-to-end scenario: one author,
/// one tag and one sticky published post tagged with it.
pub fn intro_post_export() -> String {
    WxrFixture::new()
        .author("admin", "a@x.com", "Admin")
        .tag("5", "intro", "Intro")
        .item(
            ItemFixture::post("10")
                .title("Hello")
                .field("pubDate", "Mon, 01 Jan 2024 10:00:00 +0000")
                .field("wp:status", "publish")
                .field("wp:is_sticky", "1")
                .field("wp:comment_status", "closed")
                .field("dc:creator", "admin")
                .taxonomy("post_tag", "intro"),
        )
        .build()
}

/// Categories `news` > `tech` and a post filed under `tech`.
pub fn news_tech_export() -> String {
    WxrFixture::new()
        .category("1", "news", "News", "")
        .category("2", "tech", "Tech", "news")
        .item(
            ItemFixture::post("20")
                .title("Gadgets")
                .taxonomy("category", "tech"),
        )
        .build()
}
