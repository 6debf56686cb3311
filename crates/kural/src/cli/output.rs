//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use kural_corpus::{Lang, Record};
use serde::Serialize;

/// JSON output for `kural search`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The original query string.
    query: &'a str,
    /// Total matches returned.
    total_matches: usize,
    /// Matched records, best first.
    results: &'a [&'a Record],
}

/// Prints search results as pretty JSON.
pub fn output_search_json(query: &str, results: &[&Record]) -> ExitCode {
    let output = JsonSearchOutput {
        query,
        total_matches: results.len(),
        results,
    };
    print_json(&output)
}

/// Prints a single record as pretty JSON.
pub fn output_record_json(record: &Record) -> ExitCode {
    print_json(record)
}

/// Serializes a value as pretty JSON to stdout.
fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints a record as a short listing entry: number, chapter, couplet, and
/// the selected language's translation.
pub fn print_record_brief(record: &Record, lang: Lang) {
    println!(
        "#{}  {} / {}",
        record.number, record.chapter_name.ta, record.chapter_name.en
    );
    for line in record.body.lines() {
        println!("    {line}");
    }
    let translation = record.translations.get(lang);
    if !translation.is_empty() {
        println!("    {translation}");
    }
    println!();
}

/// Prints a record in full: couplet, every translation, and commentaries.
pub fn print_record_full(record: &Record) {
    println!(
        "Kural {} — {} / {}",
        record.number, record.chapter_name.ta, record.chapter_name.en
    );
    println!();
    for line in record.body.lines() {
        println!("    {line}");
    }
    println!();

    for lang in [Lang::Ta, Lang::En, Lang::Hi] {
        let translation = record.translations.get(lang);
        if !translation.is_empty() {
            println!("{lang}: {translation}");
        }
    }

    let commentary_groups = [
        (Lang::Ta, &record.commentaries.ta),
        (Lang::En, &record.commentaries.en),
    ];
    for (lang, commentaries) in commentary_groups {
        for commentary in commentaries {
            println!();
            println!("[{lang}] {}:", commentary.author);
            println!("    {}", commentary.text);
        }
    }
}
