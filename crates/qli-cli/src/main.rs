//! qli - install prebuilt Qt SDK components

use std::process::ExitCode;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use qli_cli::Cli;
use qli_cli::ops::{self, Context, InstallError};
use qli_cli::ui::{ConsoleReporter, print_error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return clap_exit(&e),
    };

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            if e.should_show_help() {
                println!();
                Cli::command().print_help().ok();
            }
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<(), InstallError> {
    let selection = ops::resolve_selection(cli)?;
    let reporter = Arc::new(ConsoleReporter::new(cli.quiet));
    let ctx = Context::from_cli(cli, reporter)?;
    tracing::debug!(?ctx, "starting install");

    let summary = ops::install(&ctx, &selection).await?;
    tracing::info!(
        package = %summary.package,
        archives = summary.archives.len(),
        dir = %summary.install_dir.display(),
        "done"
    );
    Ok(())
}

fn clap_exit(err: &clap::Error) -> ExitCode {
    err.print().ok();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ExitCode::FAILURE,
        _ => {
            println!();
            Cli::command().print_help().ok();
            ExitCode::FAILURE
        }
    }
}
