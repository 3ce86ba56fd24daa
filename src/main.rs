use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use revscrap::{cli::Cli, info_time, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let start_time = Local::now();
    if let Err(err) = logging::init() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = revscrap::cli::run(Cli::parse()).await {
        tracing::error!("{err}");
        return ExitCode::FAILURE;
    }
    info_time!(start_time, "Full program time:");

    ExitCode::SUCCESS
}
