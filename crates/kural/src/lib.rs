//! kural: the Thirukkural from the terminal.
//!
//! A bilingual browser core for the 1,330 couplets of the Thirukkural. The
//! corpus ships as several partially-overlapping JSON fragments; kural merges
//! them into one canonical tree and answers free-text, fuzzy, and
//! number-lookup queries over it, in Tamil, English, or Hindi.

#![warn(missing_docs)]

pub mod cli;
