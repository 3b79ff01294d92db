//! Core library for lexiscore.
//!
//! Scores plain-text documents for dictionary-based sentiment, Gunning Fog
//! readability, and word-level statistics. Used by the `lexiscore` CLI and
//! MCP server, and usable on its own.
//!
//! # Modules
//!
//! - [`lexicon`] - Stop-word and positive/negative dictionary loading
//! - [`text`] - Sentence splitting, word tokenization, and cleaning
//! - [`sentiment`] - Polarity and subjectivity scoring
//! - [`readability`] - Fog Index over raw text
//! - [`lexical`] - Syllable, pronoun, and word-length statistics
//! - [`analysis`] - Per-document orchestration of the scorers
//! - [`corpus`] - Article directory and URL index loading
//! - [`report`] - Report rows and CSV output
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use lexiscore_core::{Document, Lexicon, analyze_document};
//!
//! let lexicon = Lexicon::new(["the", "is"], ["good"], ["bad"]);
//! let doc = Document::new("1", "Title", "The product is good. The price is bad.");
//! let record = analyze_document(&doc, &lexicon);
//!
//! assert_eq!(record.positive_score, 1);
//! assert_eq!(record.negative_score, 1);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod dictionaries;
pub mod error;
pub mod lexical;
pub mod lexicon;
pub mod readability;
pub mod report;
pub mod sentiment;
pub mod text;

pub use analysis::{
    Document, DocumentScores, ScoreRecord, analyze_corpus, analyze_corpus_with, analyze_document,
};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{
    ConfigError, ConfigResult, CorpusError, CorpusResult, LexiconError, LexiconResult,
};
pub use lexical::{LexicalScores, score_lexical};
pub use lexicon::Lexicon;
pub use readability::{ReadabilityScores, score_readability};
pub use report::{COLUMNS, ReportRow, write_csv};
pub use sentiment::{EPSILON, SentimentScores, score_sentiment};

/// Default per-document input size limit: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
