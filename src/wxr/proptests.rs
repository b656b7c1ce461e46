use super::decode::decode_component;
use super::pipeline::parse;
use crate::test_support::{ItemFixture, WxrFixture};
use proptest::prelude::*;

/// Slugs as WordPress writes them: lowercase words, sometimes percent-encoded.
fn slug_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,12}".prop_map(|s| s)
}

proptest! {
    /// Decoding never panics and is the identity on text without `%`.
    #[test]
    fn prop_decode_is_total(raw in any::<String>()) {
        let decoded = decode_component(&raw);
        if !raw.contains('%') {
            prop_assert_eq!(decoded, raw);
        }
    }

    /// Encoding then decoding gives back the original text.
    #[test]
    fn prop_decode_inverts_encoding(text in "\\PC{0,16}") {
        let encoded = urlencoding::encode(&text).into_owned();
        prop_assert_eq!(decode_component(&encoded), text);
    }

    /// The same export always parses to the same bundle, and posts only
    /// reference categories present in it.
    #[test]
    fn prop_parse_is_idempotent(
        slugs in proptest::collection::vec(slug_strategy(), 1..6),
        wanted in proptest::collection::vec(slug_strategy(), 0..6),
    ) {
        let mut fixture = WxrFixture::new();
        for (i, slug) in slugs.iter().enumerate() {
            fixture = fixture.category(&i.to_string(), slug, slug, "");
        }
        let mut post = ItemFixture::post("100");
        for slug in &wanted {
            post = post.taxonomy("category", slug);
        }
        let xml = fixture.item(post).build();

        let first = parse(&xml).unwrap();
        let second = parse(&xml).unwrap();
        prop_assert_eq!(&first, &second);

        for category in &first.posts[0].categories {
            prop_assert!(first.categories.iter().any(|c| c.id == category.id));
            prop_assert!(wanted.contains(&category.slug));
        }
    }
}
