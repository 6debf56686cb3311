//! Implementation of `kural search`.

use std::process::ExitCode;

use kural_search::rank;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{output_search_json, print_record_brief},
};

/// Ranks the corpus against the query and prints the best matches.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let records = ctx.records();
    let query = cmd.query.join(" ");

    let hits = rank(&query, &records);
    let shown = &hits[..hits.len().min(cmd.limit)];

    if cmd.output.json {
        return output_search_json(&query, shown);
    }

    if shown.is_empty() {
        println!("No results found.");
        return ExitCode::SUCCESS;
    }

    for record in shown {
        print_record_brief(record, cmd.lang);
    }
    if hits.len() > shown.len() {
        println!("({} more matches, raise -n to see them)", hits.len() - shown.len());
    }

    ExitCode::SUCCESS
}
