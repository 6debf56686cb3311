//! Clap argument definitions for the `kural` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use kural_corpus::Lang;

/// Parses a display language from a string.
fn parse_lang(s: &str) -> Result<Lang, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "kural")]
#[command(about = "Thirukkural - search and browse the 1,330 couplets")]
pub struct Cli {
    /// Directory containing the corpus fragment JSON documents
    #[arg(long, global = true, default_value = "data")]
    pub data: PathBuf,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `kural search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search query; multiple words form one query string
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Maximum results to print
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,

    /// Translation language to display (ta, en, or hi)
    #[arg(long, value_parser = parse_lang, default_value = "en")]
    pub lang: Lang,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `kural show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// Record number (1-1330)
    pub number: u32,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `kural daily`.
#[derive(Args, Debug, Clone)]
pub struct DailyCommand {
    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// What `kural ls` should list.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsWhat {
    /// The three books (Paals).
    Books,
    /// Sections (Iyals) grouped by book.
    Sections,
    /// Chapters (Adhigarams) grouped by section.
    Chapters,
}

/// Arguments for `kural ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Hierarchy level to list
    #[arg(value_enum, default_value_t = LsWhat::Chapters)]
    pub what: LsWhat,
}

/// Supported `kural` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpus by free text or record number
    Search(SearchCommand),

    /// Show one record with translations and commentaries
    Show(ShowCommand),

    /// Show the record of the day
    Daily(DailyCommand),

    /// List the corpus hierarchy
    Ls(LsCommand),

    /// Show fragment and corpus statistics
    Stats,
}
