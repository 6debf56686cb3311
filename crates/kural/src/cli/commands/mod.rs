//! Command implementations and dispatch.

pub mod daily;
pub mod ls;
pub mod search;
pub mod show;
pub mod stats;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Show(cmd) => show::run(ctx, &cmd),
        Commands::Daily(cmd) => daily::run(ctx, &cmd),
        Commands::Ls(cmd) => ls::run(ctx, &cmd),
        Commands::Stats => stats::run(ctx),
    }
}
