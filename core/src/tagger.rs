use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::idf::{IdfError, IdfIndex};
use crate::{normalize, rank, tf};

/// Corpus size assumed when the IDF index was built, used to derive the
/// fallback weight `ln(1 / DEFAULT_CORPUS_SIZE)` for out-of-index terms.
/// Override per generator with [`TagGenerator::corpus_size`].
pub const DEFAULT_CORPUS_SIZE: f64 = 1_000_000_000.0;

/// A term with its TF-IDF score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64,
}

impl fmt::Display for ScoredTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.term, self.score)
    }
}

/// Extracts representative tags from a document by TF-IDF against a
/// precomputed [`IdfIndex`].
///
/// The generator owns its index and never mutates it, so a single instance
/// can serve any number of scoring calls, concurrently if shared by
/// reference.
pub struct TagGenerator {
    idf: IdfIndex,
    allow_unknown: bool,
    fallback_idf: f64,
}

impl TagGenerator {
    /// Build a generator around an existing index. Unknown terms are allowed
    /// by default and scored with `ln(1 / DEFAULT_CORPUS_SIZE)`.
    pub fn new(idf: IdfIndex) -> Self {
        Self {
            idf,
            allow_unknown: true,
            fallback_idf: (1.0 / DEFAULT_CORPUS_SIZE).ln(),
        }
    }

    /// Build a generator from a `term,weight` IDF file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, IdfError> {
        Ok(Self::new(IdfIndex::from_path(path)?))
    }

    /// Whether out-of-index terms are scored with the fallback weight
    /// (`true`, the default) or dropped from the results entirely.
    /// Dropping them keeps typos and other junk out of the tag list.
    pub fn allow_unknown(mut self, allow: bool) -> Self {
        self.allow_unknown = allow;
        self
    }

    /// Set the corpus size the fallback weight is derived from; the weight
    /// for an unknown term becomes `ln(1 / size)`.
    pub fn corpus_size(mut self, size: f64) -> Self {
        self.fallback_idf = (1.0 / size).ln();
        self
    }

    /// Score every distinct term of a prepared document, descending.
    ///
    /// Each non-empty distinct token yields at most one entry: its
    /// max-normalized term frequency times its index weight, or times the
    /// fallback weight when the term is unknown and unknowns are allowed.
    /// Unknown terms are skipped outright otherwise.
    pub fn tfidf(&self, tokens: &[String]) -> Vec<ScoredTerm> {
        let tf = tf::term_frequency(tokens);
        let mut scored: Vec<ScoredTerm> = tf
            .into_iter()
            .filter_map(|(term, tf)| {
                let idf = match self.idf.get(&term) {
                    Some(w) => w,
                    None if self.allow_unknown => self.fallback_idf,
                    None => return None,
                };
                Some(ScoredTerm { term, score: tf * idf })
            })
            .collect();
        rank::sort_by_score(&mut scored);
        tracing::debug!(candidates = scored.len(), "scored document terms");
        scored
    }

    /// Extract up to `max_tags` tags from raw document text.
    pub fn generate_tags(&self, text: &str, max_tags: usize) -> Vec<String> {
        self.generate_tags_from_tokens(&normalize::normalize(text), max_tags)
    }

    /// Extract up to `max_tags` tags from an already tokenized document.
    pub fn generate_tags_from_tokens(&self, tokens: &[String], max_tags: usize) -> Vec<String> {
        rank::select_top(self.tfidf(tokens), max_tags)
    }
}
