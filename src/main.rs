use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::{error, info};

use stragglers::{run_report, utils::setup_logging, Args, RunStats};

fn report_stdin() -> Result<RunStats> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    run_report(stdin, stdout).context("Straggler report failed")
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    match report_stdin() {
        Ok(stats) => {
            info!(
                action = "exit",
                component = "main",
                lines_written = stats.lines_written(),
                "Done"
            );
            Ok(())
        }
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
