use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;

use wxr_import::error::{RichError, WxrError};

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), RichError> {
    serde_json::to_string_pretty(value)
        .map(|json| println!("{json}"))
        .map_err(|e| RichError::from(WxrError::from(e)))
}

pub fn print_yaml<T: Serialize + ?Sized>(value: &T) -> Result<(), RichError> {
    serde_yaml::to_string(value)
        .map(|yaml| print!("{yaml}"))
        .map_err(|e| RichError::from(WxrError::from(e)))
}

/// テーブルの下に出す一行サマリー
pub struct PlanSummary {
    pub prefix: String,
    pub message: String,
}

impl PlanSummary {
    pub fn format(requests: usize, groups: usize) -> Self {
        match requests {
            0 => Self {
                prefix: "•".yellow().to_string(),
                message: "Nothing to import".to_string(),
            },
            n => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} request(s) in {} group(s)", n.green(), groups),
            },
        }
    }
}

impl std::fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}
