//! Implementation of `kural show`.

use std::process::ExitCode;

use crate::cli::{
    args::ShowCommand,
    context::CommandContext,
    output::{output_record_json, print_record_full},
};

/// Looks up a record by number and prints it in full.
pub fn run(ctx: &CommandContext, cmd: &ShowCommand) -> ExitCode {
    let records = ctx.records();

    let Some(record) = records.iter().find(|r| r.number == cmd.number) else {
        eprintln!("error: no kural numbered {}", cmd.number);
        return ExitCode::FAILURE;
    };

    if cmd.output.json {
        return output_record_json(record);
    }

    print_record_full(record);
    ExitCode::SUCCESS
}
