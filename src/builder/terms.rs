use serde::Serialize;

use crate::model::ImportBundle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDraft {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Ids of the direct child categories.
    pub children: Vec<String>,
}

pub fn tag_drafts(bundle: &ImportBundle) -> Vec<TagDraft> {
    bundle
        .tags
        .iter()
        .map(|tag| TagDraft {
            id: tag.id.clone(),
            name: tag.name.clone(),
            slug: tag.slug.clone(),
        })
        .collect()
}

/// One draft per category, children derived from the other categories'
/// parent slugs. A category whose parent is missing is still emitted; it
/// just never shows up as anyone's child.
pub fn category_drafts(bundle: &ImportBundle) -> Vec<CategoryDraft> {
    bundle
        .categories
        .iter()
        .map(|category| CategoryDraft {
            id: category.id.clone(),
            name: category.name.clone(),
            slug: category.slug.clone(),
            children: bundle.child_category_ids(&category.slug),
        })
        .collect()
}
