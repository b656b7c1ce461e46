//! wxr-import plan コマンド
//!
//! エクスポートから作成リクエストを組み立てて表示する。実行はしない。

use std::path::{Path, PathBuf};

use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use tracing::debug;
use wxr_import::builder::{EntityKind, HaloDestination, ImportPlan, RequestBuilder};
use wxr_import::config::ImportConfig;
use wxr_import::env::{EnvVar, CONFIG_ENV};
use wxr_import::error::RichError;

use super::load_bundle;
use crate::output::{print_json, print_yaml, OutputFormat, PlanSummary};

#[derive(Debug, Parser)]
pub struct Args {
    /// WXR export file
    pub file: PathBuf,

    /// 出力形式
    #[arg(long, short = 'f', value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Plan only these kinds (repeatable; overrides the config's `include`)
    #[arg(long, value_enum)]
    pub only: Vec<EntityKind>,

    /// Config file (defaults to $WXR_IMPORT_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub async fn run(args: Args) -> Result<(), RichError> {
    // 1. 設定を読み込む
    let config = load_config(args.config.as_deref())?.with_only(&args.only);

    // 2. パース
    let bundle = load_bundle(&args.file).await?;

    // 3. リクエストを組み立てる
    let plan = RequestBuilder::new(&bundle, HaloDestination)
        .with_targets(config.target_index())
        .plan(&config.include);

    // 4. 出力
    match args.format {
        OutputFormat::Table => print_table(&plan),
        OutputFormat::Json => print_json(&plan)?,
        OutputFormat::Yaml => print_yaml(&plan)?,
    }

    Ok(())
}

/// `--config` > 環境変数 > 既定値
fn load_config(explicit: Option<&Path>) -> Result<ImportConfig, RichError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match EnvVar::get(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => return Ok(ImportConfig::default()),
        },
    };

    debug!(path = %path.display(), "loading config");
    ImportConfig::load(&path).map_err(|e| RichError::from(e).at_path(path))
}

fn print_table(plan: &ImportPlan) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Kind", "Resource", "Requests"]);

    for group in &plan.groups {
        let resource = group
            .requests
            .first()
            .map(|request| request.resource.as_str())
            .unwrap_or("-");
        table.add_row(vec![
            group.kind.to_string(),
            resource.to_string(),
            group.requests.len().to_string(),
        ]);
    }

    println!("{table}");
    println!("{}", PlanSummary::format(plan.len(), plan.groups.len()));
}
