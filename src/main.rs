//! PasteBridge CLI entry point

use std::process::ExitCode;

use clap::Parser;

use pastebridge::cli::{
    app::{cli_config, load_merged_config, run},
    args::Cli,
    logging,
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = load_merged_config(cli_config(&cli)).await;
    logging::init(cli.verbose, config.log_level_or_default());

    run(cli, config).await
}
