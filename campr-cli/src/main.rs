//! campr-cli - validate, summarize and render campsite demand datasets.

use clap::Parser;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "campr-cli",
    version,
    about = "National park campsite demand toolkit"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: campr_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let started = Instant::now();
    campr_cmd::run(cli.command).await?;
    log::debug!("[campr] done in {:.2?}", started.elapsed());
    Ok(())
}
