//! Corpus flattening into document order.

use crate::model::{Corpus, Record};

/// Flattens the corpus into its natural document order.
///
/// Depth-first: book order, then section order, then chapter order, then
/// record order. The result borrows from the corpus and must be recomputed
/// whenever the corpus is rebuilt. This order is the default presentation
/// order and the base for the record-of-the-day index, so it is stable and
/// reproducible from the same corpus.
pub fn flatten(corpus: &Corpus) -> Vec<&Record> {
    corpus
        .books
        .iter()
        .flat_map(|book| &book.sections)
        .flat_map(|section| &section.chapters)
        .flat_map(|chapter| &chapter.records)
        .collect()
}
