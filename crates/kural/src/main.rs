//! Command-line interface for the `kural` Thirukkural browser.

use std::process::ExitCode;

use clap::Parser;
use kural::cli::{CommandContext, args::Cli, commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match CommandContext::load(&cli.data) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
