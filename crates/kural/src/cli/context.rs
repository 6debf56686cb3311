//! Shared context for running CLI commands.

use std::{path::Path, process::ExitCode};

use kural_corpus::{Corpus, LoadWarning, Record, discover_fragments, flatten, load_fragments, merge};

/// Command execution context built once per CLI invocation.
///
/// Holds the merged corpus; flattened views are recomputed from it on
/// demand so they can stay borrows.
pub struct CommandContext {
    /// The merged canonical corpus.
    pub corpus: Corpus,
    /// Number of fragments that loaded successfully.
    pub fragment_count: usize,
    /// Fragments that were skipped during loading.
    pub warnings: Vec<LoadWarning>,
}

impl CommandContext {
    /// Discovers, loads, and merges the corpus fragments under `data_dir`.
    ///
    /// Unreadable fragments are skipped with a warning on stderr; only a
    /// missing or unreadable data directory is fatal.
    pub fn load(data_dir: &Path) -> Result<Self, ExitCode> {
        let paths = match discover_fragments(data_dir) {
            Ok(paths) => paths,
            Err(e) => {
                eprintln!("error: {e}");
                return Err(ExitCode::FAILURE);
            }
        };

        let (fragments, warnings) = load_fragments(&paths);
        for warning in &warnings {
            eprintln!("warning: {warning}");
        }

        Ok(Self {
            corpus: merge(&fragments),
            fragment_count: fragments.len(),
            warnings,
        })
    }

    /// Returns the corpus flattened into document order.
    pub fn records(&self) -> Vec<&Record> {
        flatten(&self.corpus)
    }
}
