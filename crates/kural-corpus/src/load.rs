//! Fragment loading.
//!
//! The corpus ships as several JSON documents, each covering part of the
//! hierarchy. Loading is best-effort: a fragment that cannot be read or
//! parsed is skipped with a warning rather than failing the whole load,
//! matching how the browser frontend treated an unreachable data file.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::{error::CorpusError, model::Corpus};

/// A fragment that was skipped during [`load_fragments`].
#[derive(Debug)]
pub struct LoadWarning {
    /// Path to the skipped fragment.
    pub path: PathBuf,
    /// Why it was skipped.
    pub message: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped {}: {}", self.path.display(), self.message)
    }
}

/// Loads and parses a single fragment document.
///
/// Chapter names are stamped onto records that lack them, so every record in
/// the returned corpus carries its enclosing chapter's name.
pub fn load_fragment(path: &Path) -> Result<Corpus, CorpusError> {
    let raw =
        fs::read_to_string(path).map_err(|e| CorpusError::read(path.to_path_buf(), e))?;
    let mut corpus: Corpus =
        serde_json::from_str(&raw).map_err(|e| CorpusError::parse(path.to_path_buf(), &e))?;
    corpus.stamp_chapter_names();
    Ok(corpus)
}

/// Loads every fragment it can, skipping failures.
///
/// Returns the loaded fragments in input order plus one warning per skipped
/// path. Never fails as a whole: zero readable fragments yield an empty
/// fragment list, which merges into a valid empty corpus.
pub fn load_fragments<P: AsRef<Path>>(paths: &[P]) -> (Vec<Corpus>, Vec<LoadWarning>) {
    let mut fragments = Vec::with_capacity(paths.len());
    let mut warnings = Vec::new();

    for path in paths {
        let path = path.as_ref();
        match load_fragment(path) {
            Ok(corpus) => fragments.push(corpus),
            Err(e) => warnings.push(LoadWarning {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    (fragments, warnings)
}

/// Lists the fragment documents in a data directory.
///
/// Returns every `*.json` file sorted by filename, so fragment order (and
/// therefore merge order) is deterministic across platforms.
pub fn discover_fragments(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let entries = fs::read_dir(dir).map_err(|e| CorpusError::read(dir.to_path_buf(), e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CorpusError::read(dir.to_path_buf(), e))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
