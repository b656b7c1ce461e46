use serde::Serialize;

use crate::model::ImportBundle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDraft {
    /// Login, used as the destination identifier.
    pub login: String,
    pub display_name: String,
    pub email: String,
}

pub fn author_drafts(bundle: &ImportBundle) -> Vec<AuthorDraft> {
    bundle
        .authors
        .iter()
        .map(|author| AuthorDraft {
            login: author.login.clone(),
            display_name: author.display_name.clone(),
            email: author.email.clone(),
        })
        .collect()
}
