mod cli;
mod commands;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wxr_import::env::{EnvVar, LOG_ENV};
use wxr_import::error::ErrorFormatter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose;
    init_tracing(verbose);

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{}", ErrorFormatter::new(verbose > 0).format(&err));
        std::process::exit(1);
    }
}

/// ログは stderr へ。`WXR_IMPORT_LOG` があれば `-v` より優先する
fn init_tracing(verbose: u8) {
    let filter = EnvVar::get(LOG_ENV)
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
