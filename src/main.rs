// file: src/main.rs
// version: 1.0.0
// guid: 00f52a8b-073d-492a-9c5b-7827d12ecfee

//! Router Restart Agent - Main entry point

use clap::Parser;
use router_restart_agent::{
    cli::{args::Cli, commands::restart_command, RunOutcome},
    logging::logger,
};
use std::process::ExitCode;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
        return ExitCode::from(2);
    }

    match restart_command(&cli).await {
        Ok(RunOutcome::Online) => ExitCode::SUCCESS,
        Ok(RunOutcome::DryRun { restart_page }) => {
            info!("Dry run complete; restart form available at {}", restart_page);
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Restarted(confirmation)) => {
            info!("Router is restarting (confirmed at {})", confirmation.url);
            ExitCode::SUCCESS
        }
        Err(e) => {
            logger::report_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
