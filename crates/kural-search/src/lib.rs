//! Search and ranking for the kural corpus.
//!
//! The corpus is small enough (1,330 couplets) that every query is answered
//! by a fresh linear scan over the flattened record list — there is no
//! persistent index. A query is either:
//!
//! - **Numeric**: an exact lookup by record number, or
//! - **Textual**: scored per record, with whole-phrase substring hits
//!   ranked above typo-tolerant token matches driven by Levenshtein
//!   distance.
//!
//! # Example
//!
//! ```
//! use kural_search::rank;
//!
//! let records = [];
//! assert!(rank("", &records).is_empty());
//! ```

#![warn(missing_docs)]

mod daily;
mod distance;
mod rank;

pub use daily::record_of_the_day;
pub use distance::levenshtein;
pub use rank::rank;
