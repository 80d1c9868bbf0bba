//! TF-IDF tag extraction against a precomputed corpus-wide IDF index.
//!
//! Pipeline: [`normalize::normalize`] turns raw text into lowercase
//! alphabetic tokens, [`tf`] computes max-normalized term frequencies,
//! [`TagGenerator`] joins them with the [`IdfIndex`] weights (or a fallback
//! for out-of-index terms), and [`rank`] selects the top terms by descending
//! score.

pub mod idf;
pub mod normalize;
pub mod rank;
pub mod tagger;
pub mod tf;

pub use idf::{IdfError, IdfIndex};
pub use tagger::{ScoredTerm, TagGenerator, DEFAULT_CORPUS_SIZE};
