use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Record kinds a menu item can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Page,
    Post,
    Category,
}

/// Destination names for menu targets that were already created.
///
/// A target without a remap is referenced by its source id, which is also
/// the name the builders give every record they create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetIndex {
    remaps: HashMap<TargetKind, HashMap<String, String>>,
}

impl TargetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remap(
        mut self,
        kind: TargetKind,
        source_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.insert(kind, source_id, name);
        self
    }

    pub fn insert(&mut self, kind: TargetKind, source_id: impl Into<String>, name: impl Into<String>) {
        self.remaps
            .entry(kind)
            .or_default()
            .insert(source_id.into(), name.into());
    }

    /// Destination name for the record `source_id` of `kind`.
    pub fn name_for(&self, kind: TargetKind, source_id: &str) -> String {
        self.remaps
            .get(&kind)
            .and_then(|names| names.get(source_id))
            .cloned()
            .unwrap_or_else(|| source_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.remaps.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
