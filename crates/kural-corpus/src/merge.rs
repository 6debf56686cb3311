//! Corpus fragment merging.
//!
//! Combines multiple partially-overlapping fragment corpora into one
//! canonical tree. Books and sections are identified by their English
//! display name; chapters are concatenated verbatim, never deduplicated —
//! the real corpus is partitioned across fragments at chapter granularity,
//! so two fragments contributing the same section each supply distinct
//! chapters.

use std::collections::HashMap;

use crate::model::{Book, Corpus, Section};

/// Merges fragment corpora into one canonical [`Corpus`].
///
/// Fragments are processed in input order. The first fragment to contribute
/// a book or section fixes its position in the result; later fragments with
/// the same book name have their sections merged in by the same rule, and
/// same-named sections have their chapter lists appended as-is.
///
/// Never fails: an empty fragment list yields an empty corpus. Fragments
/// that failed to load upstream are simply absent from the slice.
pub fn merge(fragments: &[Corpus]) -> Corpus {
    let mut books: Vec<Book> = Vec::new();
    let mut book_index: HashMap<String, usize> = HashMap::new();

    for fragment in fragments {
        for book in &fragment.books {
            if let Some(&at) = book_index.get(book.name.en.as_str()) {
                merge_sections(&mut books[at], book);
            } else {
                book_index.insert(book.name.en.clone(), books.len());
                books.push(book.clone());
            }
        }
    }

    Corpus { books }
}

/// Merges an incoming book's sections into an already-placed book.
fn merge_sections(existing: &mut Book, incoming: &Book) {
    for section in &incoming.sections {
        match find_section(&existing.sections, &section.name.en) {
            None => existing.sections.push(section.clone()),
            Some(at) => existing.sections[at]
                .chapters
                .extend(section.chapters.iter().cloned()),
        }
    }
}

/// Finds a section by English name, preserving first-seen position.
fn find_section(sections: &[Section], name_en: &str) -> Option<usize> {
    sections.iter().position(|s| s.name.en == name_en)
}
