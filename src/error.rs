use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building a [`LexiconStore`](crate::lexicon::LexiconStore).
///
/// Scoring never fails, so this is the only error type in the crate.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{lexicon}: entry `{key}` has {found} dimensions, expected {expected}")]
    DimensionMismatch {
        lexicon: String,
        key: String,
        found: usize,
        expected: usize,
    },

    #[error("{lexicon}: entry `{key}` has a non-finite score")]
    NonFiniteScore { lexicon: String, key: String },

    #[error("{lexicon}: line {line}: {reason}")]
    Malformed {
        lexicon: String,
        line: u64,
        reason: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
