//! インポート設定
//!
//! TOML ファイルから読み込む。ファイルがなければ既定値（全種別、リマップなし）。
//!
//! ```toml
//! include = ["tags", "categories", "posts"]
//!
//! [remap.pages]
//! "12" = "about"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builder::{EntityKind, TargetIndex, TargetKind};
use crate::error::Result;

/// Import settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Entity kinds to plan.
    pub include: Vec<EntityKind>,
    pub remap: RemapConfig,
}

/// Source id -> destination name, per menu target kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemapConfig {
    pub pages: HashMap<String, String>,
    pub posts: HashMap<String, String>,
    pub categories: HashMap<String, String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            include: EntityKind::all().to_vec(),
            remap: RemapConfig::default(),
        }
    }
}

impl ImportConfig {
    /// ファイルから読み込んで正規化する
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.normalize();
        Ok(config)
    }

    /// 正規化（重複排除 + 実行順ソート）
    pub fn normalize(&mut self) {
        self.include.sort();
        self.include.dedup();
    }

    /// `--only` で指定された種別があれば `include` を置き換える
    pub fn with_only(mut self, only: &[EntityKind]) -> Self {
        if !only.is_empty() {
            self.include = only.to_vec();
            self.normalize();
        }
        self
    }

    pub fn target_index(&self) -> TargetIndex {
        let mut index = TargetIndex::new();
        let remaps = [
            (TargetKind::Page, &self.remap.pages),
            (TargetKind::Post, &self.remap.posts),
            (TargetKind::Category, &self.remap.categories),
        ];
        for (kind, names) in remaps {
            for (source_id, name) in names {
                index.insert(kind, source_id.as_str(), name.as_str());
            }
        }
        index
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
