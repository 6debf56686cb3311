//! Implementation of `kural ls`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};

use crate::cli::{
    args::{LsCommand, LsWhat},
    context::CommandContext,
};

/// Lists books, sections, or chapters of the merged corpus.
pub fn run(ctx: &CommandContext, cmd: &LsCommand) -> ExitCode {
    if ctx.corpus.books.is_empty() {
        println!("The corpus is empty.");
        return ExitCode::SUCCESS;
    }

    let table = match cmd.what {
        LsWhat::Books => books_table(ctx),
        LsWhat::Sections => sections_table(ctx),
        LsWhat::Chapters => chapters_table(ctx),
    };
    println!("{table}");

    ExitCode::SUCCESS
}

/// Creates a table with the standard preset and header.
fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header);
    table
}

/// One row per book with section, chapter, and record counts.
fn books_table(ctx: &CommandContext) -> Table {
    let mut table = new_table(vec!["Book", "", "Sections", "Chapters", "Kurals"]);
    for book in &ctx.corpus.books {
        let chapters: usize = book.sections.iter().map(|s| s.chapters.len()).sum();
        let records: usize = book
            .sections
            .iter()
            .flat_map(|s| &s.chapters)
            .map(|c| c.records.len())
            .sum();
        table.add_row(vec![
            Cell::new(&book.name.ta),
            Cell::new(&book.name.en),
            Cell::new(book.sections.len()),
            Cell::new(chapters),
            Cell::new(records),
        ]);
    }
    table
}

/// One row per section, grouped under its book.
fn sections_table(ctx: &CommandContext) -> Table {
    let mut table = new_table(vec!["Book", "Section", "", "Chapters", "Kurals"]);
    for book in &ctx.corpus.books {
        for section in &book.sections {
            let records: usize = section.chapters.iter().map(|c| c.records.len()).sum();
            table.add_row(vec![
                Cell::new(&book.name.en),
                Cell::new(&section.name.ta),
                Cell::new(&section.name.en),
                Cell::new(section.chapters.len()),
                Cell::new(records),
            ]);
        }
    }
    table
}

/// One row per chapter with its record number range.
fn chapters_table(ctx: &CommandContext) -> Table {
    let mut table = new_table(vec!["Section", "Chapter", "", "Kurals"]);
    for book in &ctx.corpus.books {
        for section in &book.sections {
            for chapter in &section.chapters {
                let range = match (chapter.records.first(), chapter.records.last()) {
                    (Some(first), Some(last)) => format!("{}-{}", first.number, last.number),
                    _ => "-".to_string(),
                };
                table.add_row(vec![
                    Cell::new(&section.name.en),
                    Cell::new(&chapter.name.ta),
                    Cell::new(&chapter.name.en),
                    Cell::new(range),
                ]);
            }
        }
    }
    table
}
