//! Corpus model and construction for kural.
//!
//! This crate owns the Thirukkural entity tree and everything needed to build
//! it from source documents:
//! - The four-level containment hierarchy: [`Corpus`] → [`Book`] → [`Section`]
//!   → [`Chapter`] → [`Record`]
//! - Deserialization of fragment JSON documents ([`load_fragment`],
//!   [`load_fragments`])
//! - Merging partially-overlapping fragments into one canonical tree
//!   ([`merge`])
//! - Flattening the tree into document order ([`flatten`])
//!
//! The tree is immutable once built; downstream consumers (the search crate,
//! the CLI) operate on borrows of it.

#![warn(missing_docs)]

mod error;
mod flatten;
mod load;
mod merge;
mod model;

pub use error::CorpusError;
pub use flatten::flatten;
pub use load::{LoadWarning, discover_fragments, load_fragment, load_fragments};
pub use merge::merge;
pub use model::{Book, Chapter, Commentaries, Commentary, Corpus, Lang, LangText, Record, Section};
