mod app;
mod effects;
mod keys;
mod logging;
mod ui;

use std::path::PathBuf;

use app_logging::app_info;
use clap::Parser;

/// Terminal browser for the community hot-issue aggregator.
#[derive(Debug, Parser)]
#[command(name = "hotissue", version, about)]
struct Cli {
    /// Base URL of the aggregation backend.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    api_url: String,

    /// Directory the static page export is written into.
    #[arg(long, default_value = "./export")]
    export_dir: PathBuf,

    /// File application logs are written to. The terminal belongs to the
    /// UI, so nothing is ever logged to it.
    #[arg(long, default_value = "./hotissue.log")]
    log_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(&cli.log_file);
    app_info!("starting against {}", cli.api_url);
    app::run(cli)
}
