//! Dictionaries for text analysis.
//!
//! Curated word sets used by sentence splitting and lexical statistics.

pub mod abbreviations;
pub mod pronouns;
