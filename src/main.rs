use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use rcstrings::cli::{Arguments, Command, ExitStatus, run_cli};
use rcstrings::mcp::run_server;

fn main() -> ExitCode {
    let args = Arguments::parse();

    let outcome: anyhow::Result<ExitCode> = if matches!(args.command, Some(Command::Serve)) {
        run_server().map(|()| ExitStatus::Success.into())
    } else {
        run_cli(args)
    };

    outcome.unwrap_or_else(|err| {
        eprintln!("{}: {:#}", "error".bold().red(), err);
        ExitStatus::Error.into()
    })
}
