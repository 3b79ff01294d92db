//! Error types for lexiscore-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading stop words or the master dictionary.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A lexicon directory or word file does not exist.
    #[error("lexicon source not found: {path}")]
    NotFound {
        /// The missing path.
        path: Utf8PathBuf,
    },

    /// A lexicon source exists but could not be read.
    #[error("failed to read lexicon source {path}: {source}")]
    Read {
        /// The path that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Errors that can occur while discovering documents or reading the URL index.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The article directory or URL index does not exist.
    #[error("corpus source not found: {path}")]
    NotFound {
        /// The missing path.
        path: Utf8PathBuf,
    },

    /// A file could not be read (I/O failure or invalid UTF-8).
    #[error("failed to read {path}: {source}")]
    Read {
        /// The path that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A document exceeds the configured input size limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// The oversized file.
        path: Utf8PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// A URL index line has no `URL_ID`/`URL` separator.
    #[error("malformed URL index entry at {path}:{line}")]
    Malformed {
        /// The URL index file.
        path: Utf8PathBuf,
        /// One-based line number.
        line: usize,
    },
}

/// Result type alias using [`CorpusError`].
pub type CorpusResult<T> = Result<T, CorpusError>;

impl CorpusError {
    /// Map an I/O error on `path` to `NotFound` or `Read`.
    pub(crate) fn from_io(path: &camino::Utf8Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

impl LexiconError {
    /// Map an I/O error on `path` to `NotFound` or `Read`.
    pub(crate) fn from_io(path: &camino::Utf8Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
