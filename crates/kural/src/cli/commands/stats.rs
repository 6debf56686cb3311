//! Implementation of `kural stats`.

use std::process::ExitCode;

use crate::cli::context::CommandContext;

/// Shows fragment, hierarchy, and record counts for the merged corpus.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let corpus = &ctx.corpus;
    let sections: usize = corpus.books.iter().map(|b| b.sections.len()).sum();
    let chapters: usize = corpus
        .books
        .iter()
        .flat_map(|b| &b.sections)
        .map(|s| s.chapters.len())
        .sum();

    println!("Fragments loaded: {}", ctx.fragment_count);
    println!("Fragments skipped: {}", ctx.warnings.len());
    println!("Books: {}", corpus.books.len());
    println!("Sections: {sections}");
    println!("Chapters: {chapters}");
    println!("Kurals: {}", corpus.record_count());

    ExitCode::SUCCESS
}
