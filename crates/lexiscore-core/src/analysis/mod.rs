//! Per-document scoring.
//!
//! [`analyze_document`] cleans the body once and hands the cleaned words to
//! the sentiment and lexical scorers, while the readability scorer reads the
//! raw body. [`analyze_corpus`] repeats that for each document in order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexical::{self, LexicalScores};
use crate::lexicon::Lexicon;
use crate::readability::{self, ReadabilityScores};
use crate::sentiment::{self, SentimentScores};
use crate::text;

/// One article: identifier, title line, and body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Document {
    /// Identifier, usually the URL_ID the article was saved under.
    pub id: String,
    /// Raw title string.
    pub title: String,
    /// Raw body text.
    pub body: String,
}

impl Document {
    /// Build a document from its parts.
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Every metric computed for one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreRecord {
    /// Cleaned words in the positive dictionary.
    pub positive_score: usize,
    /// Cleaned words in the negative dictionary.
    pub negative_score: usize,
    /// `(pos - neg) / (pos + neg + ε)`.
    pub polarity_score: f64,
    /// `(pos + neg) / (cleaned words + ε)`.
    pub subjectivity_score: f64,
    /// Raw tokens per sentence.
    pub avg_sentence_length: f64,
    /// Complex tokens divided by raw tokens.
    pub pct_complex_words: f64,
    /// Gunning Fog Index.
    pub fog_index: f64,
    /// Raw tokens with more than two vowels.
    pub complex_word_count: usize,
    /// Raw tokens, punctuation and stop words included.
    pub word_count: usize,
    /// Vowels across cleaned words.
    pub syllable_count: usize,
    /// Personal pronouns across cleaned words.
    pub personal_pronoun_count: usize,
    /// Mean characters per cleaned word.
    pub avg_word_length: f64,
    /// Mean vowels per cleaned word.
    pub avg_syllables_per_word: f64,
}

impl ScoreRecord {
    /// Merge the three scorer outputs into one record.
    pub const fn from_parts(
        sentiment: SentimentScores,
        readability: ReadabilityScores,
        lexical: LexicalScores,
    ) -> Self {
        Self {
            positive_score: sentiment.positive_score,
            negative_score: sentiment.negative_score,
            polarity_score: sentiment.polarity_score,
            subjectivity_score: sentiment.subjectivity_score,
            avg_sentence_length: readability.avg_sentence_length,
            pct_complex_words: readability.pct_complex_words,
            fog_index: readability.fog_index,
            complex_word_count: readability.complex_word_count,
            word_count: readability.word_count,
            syllable_count: lexical.syllable_count,
            personal_pronoun_count: lexical.personal_pronoun_count,
            avg_word_length: lexical.avg_word_length,
            avg_syllables_per_word: lexical.avg_syllables_per_word,
        }
    }
}

/// A document identifier and title paired with its scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentScores {
    /// Document identifier.
    pub id: String,
    /// Document title.
    pub title: String,
    /// Computed metrics.
    pub scores: ScoreRecord,
}

impl DocumentScores {
    /// Score `document` and keep its identifier and title alongside.
    pub fn score(document: &Document, lexicon: &Lexicon) -> Self {
        Self {
            id: document.id.clone(),
            title: document.title.clone(),
            scores: analyze_document(document, lexicon),
        }
    }
}

/// Score one document.
#[tracing::instrument(skip_all, fields(id = %document.id, body_len = document.body.len()))]
pub fn analyze_document(document: &Document, lexicon: &Lexicon) -> ScoreRecord {
    let cleaned = text::clean_words(&document.body, lexicon.stop_words());

    let sentiment = sentiment::score_sentiment(
        &cleaned,
        lexicon.positive_words(),
        lexicon.negative_words(),
    );
    let lexical = lexical::score_lexical(&cleaned);
    let readability = readability::score_readability(&document.body);

    tracing::debug!(cleaned_words = cleaned.len(), "document scored");

    ScoreRecord::from_parts(sentiment, readability, lexical)
}

/// Score each document independently, preserving input order.
pub fn analyze_corpus(documents: &[Document], lexicon: &Lexicon) -> Vec<DocumentScores> {
    analyze_corpus_with(documents, lexicon, |_| {})
}

/// Like [`analyze_corpus`], calling `on_scored` after each document.
#[tracing::instrument(skip_all, fields(documents = documents.len()))]
pub fn analyze_corpus_with<F>(
    documents: &[Document],
    lexicon: &Lexicon,
    mut on_scored: F,
) -> Vec<DocumentScores>
where
    F: FnMut(&DocumentScores),
{
    documents
        .iter()
        .map(|document| {
            let scored = DocumentScores::score(document, lexicon);
            on_scored(&scored);
            scored
        })
        .collect()
}
