use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{inspect, plan};

#[derive(Debug, Parser)]
#[command(name = "wxr-import")]
#[command(version)]
#[command(
    about = "Inspect WordPress WXR exports and plan their import",
    long_about = None
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// エクスポートの内容を表示
    Inspect(inspect::Args),

    /// 作成リクエストの一覧を生成
    Plan(plan::Args),
}
