use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use owm_dash::cli::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    owm_dash::run(cli).await
}
