//! wxr-import inspect コマンド
//!
//! エクスポートをパースし、種別ごとの件数またはバンドル全体を表示する。

use std::path::PathBuf;

use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use wxr_import::error::RichError;
use wxr_import::model::BundleCounts;

use super::load_bundle;
use crate::output::{print_json, print_yaml, OutputFormat};

#[derive(Debug, Parser)]
pub struct Args {
    /// WXR export file
    pub file: PathBuf,

    /// 出力形式
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,
}

pub async fn run(args: Args) -> Result<(), RichError> {
    let bundle = load_bundle(&args.file).await?;

    match args.format {
        OutputFormat::Table => print_table(&bundle.counts()),
        OutputFormat::Json => print_json(&bundle)?,
        OutputFormat::Yaml => print_yaml(&bundle)?,
    }

    Ok(())
}

fn print_table(counts: &BundleCounts) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Kind", "Count"]);

    let rows = [
        ("Tags", counts.tags),
        ("Categories", counts.categories),
        ("Posts", counts.posts),
        ("Pages", counts.pages),
        ("Authors", counts.authors),
        ("Attachments", counts.attachments),
        ("Menus", counts.menus),
        ("Menu items", counts.menu_items),
    ];
    for (kind, count) in rows {
        table.add_row(vec![kind.to_string(), count.to_string()]);
    }

    println!("{table}");
}
