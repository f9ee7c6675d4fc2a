//! Error types for wetext-fst (spec.md §7).

use thiserror::Error;

/// wetext-fst error types.
#[derive(Error, Debug)]
pub enum WeTextError {
    /// A TSV lexicon could not be read or parsed. Fatal during construction.
    #[error("failed to load lexicon {0}: {1}")]
    LexiconLoadError(String, String),

    /// A class grammar could not be composed (e.g. an impossible
    /// composition). Fatal during construction.
    #[error("failed to construct grammar {0}: {1}")]
    GrammarConstructionError(String, String),

    /// FST file not found on disk.
    #[error("FST file not found: {0}")]
    FstNotFound(String),

    /// Failed to load a cached FST from disk.
    #[error("failed to load FST: {0}")]
    FstLoadError(String),

    /// A kernel-level FST operation failed.
    #[error("FST operation failed: {0}")]
    FstOperationError(String),

    /// Invalid language selection.
    #[error("invalid language: {0}")]
    InvalidLanguage(String),

    /// Invalid operator selection.
    #[error("invalid operator: {0}")]
    InvalidOperator(String),

    /// The tagger produced a tagged-token string the parser cannot read.
    /// This indicates a grammar bug, not bad input (spec.md §7).
    #[error("malformed tagged-token string: {0}")]
    TokenParseError(String),

    /// IO error, typically from the on-disk FST cache.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for wetext-fst operations.
pub type Result<T> = std::result::Result<T, WeTextError>;
