//! Implementation of `kural daily`.

use std::process::ExitCode;

use chrono::{Datelike, Local};
use kural_search::record_of_the_day;

use crate::cli::{
    args::DailyCommand,
    context::CommandContext,
    output::{output_record_json, print_record_full},
};

/// Prints the record of the day.
///
/// The clock is read here at the edge; the selector itself is a pure
/// function of the day of month and the flattened corpus.
pub fn run(ctx: &CommandContext, cmd: &DailyCommand) -> ExitCode {
    let records = ctx.records();
    let day_of_month = Local::now().day();

    let Some(record) = record_of_the_day(&records, day_of_month) else {
        eprintln!("error: the corpus is empty");
        return ExitCode::FAILURE;
    };

    if cmd.output.json {
        return output_record_json(record);
    }

    print_record_full(record);
    ExitCode::SUCCESS
}
