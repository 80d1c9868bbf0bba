use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::Path;

/// Failure while building an [`IdfIndex`]. Construction is atomic: the first
/// bad line or I/O error aborts and no partial index is returned.
#[derive(Debug, thiserror::Error)]
pub enum IdfError {
    /// The IDF source could not be read.
    #[error("failed to read idf source")]
    Io(#[from] std::io::Error),
    /// A record had no `,` between term and weight.
    #[error("line {line}: missing ',' separator")]
    MissingSeparator { line: usize },
    /// The weight portion of a record was not a valid float.
    #[error("line {line}: invalid weight {value:?}")]
    InvalidWeight {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Precomputed corpus-wide inverse document frequencies, keyed by term.
///
/// Built once from a `term,weight` file, any reader over the same format, or
/// an in-memory map, and read-only afterwards. Because the index holds no
/// interior mutability, shared references can be used from many threads
/// without locking.
///
/// Weights are typically negative: the index builder records
/// `ln(documents_containing_term / total_documents)`.
#[derive(Debug, Clone, Default)]
pub struct IdfIndex {
    weights: HashMap<String, f64>,
}

impl IdfIndex {
    /// Load an index from a `term,weight` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, IdfError> {
        let f = File::open(path)?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse line-delimited `term,weight` records.
    ///
    /// Each line must contain exactly one comma followed by a decimal float
    /// (`.` decimal point, no locale). Terms containing a comma are
    /// unsupported: the text after the first comma fails to parse as a
    /// weight and the whole load fails. Line numbers in errors are 1-based.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, IdfError> {
        let mut weights: HashMap<String, f64> = HashMap::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let lineno = i + 1;
            let (term, weight) = line
                .split_once(',')
                .ok_or(IdfError::MissingSeparator { line: lineno })?;
            let weight: f64 = weight.parse().map_err(|e| IdfError::InvalidWeight {
                line: lineno,
                value: weight.to_string(),
                source: e,
            })?;
            weights.insert(term.to_string(), weight);
        }
        tracing::debug!(terms = weights.len(), "idf index loaded");
        Ok(Self { weights })
    }

    /// Wrap a prebuilt term -> weight map.
    pub fn from_map(weights: HashMap<String, f64>) -> Self {
        Self { weights }
    }

    /// Weight for `term`, or `None` if the term is not in the index.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl From<HashMap<String, f64>> for IdfIndex {
    fn from(weights: HashMap<String, f64>) -> Self {
        Self::from_map(weights)
    }
}
