//! crop-cli - Command line tool for inspecting the regional crop dataset.

use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(
    name = "crop-cli",
    version,
    about = "Regional crop dataset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: crop_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    info!("crop-cli {} starting", env!("CARGO_PKG_VERSION"));
    crop_cmd::run(cli.command).await
}
