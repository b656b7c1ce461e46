use std::path::Path;

use wxr_import::error::{RichError, WxrError};
use wxr_import::wxr;
use wxr_import::ImportBundle;

use crate::cli::Command;

pub mod inspect;
pub mod plan;

pub async fn dispatch(cli: crate::cli::Cli) -> Result<(), RichError> {
    match cli.command {
        Command::Inspect(args) => inspect::run(args).await,
        Command::Plan(args) => plan::run(args).await,
    }
}

/// エクスポートファイルを読み込んでパースする
async fn load_bundle(path: &Path) -> Result<ImportBundle, RichError> {
    let xml = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| RichError::from(WxrError::from(e)).at_path(path))?;
    wxr::parse(&xml).map_err(|e| RichError::from(e).at_path(path))
}
