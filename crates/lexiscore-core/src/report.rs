//! Report rows and CSV rendering.
//!
//! One [`ReportRow`] per document, in the fixed output column order. Rows
//! serialize to JSON with the column names as keys, and [`write_csv`] renders
//! them as RFC 4180 delimited text.

use std::io::{self, Write};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::DocumentScores;

/// Output column names, in order.
pub const COLUMNS: [&str; 15] = [
    "URL_ID",
    "URL",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// One output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportRow {
    /// Document identifier.
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    /// Source URL, empty when the index has none.
    #[serde(rename = "URL")]
    pub url: String,
    /// Positive dictionary hits.
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: usize,
    /// Negative dictionary hits.
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: usize,
    /// Net sentiment direction.
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    /// Share of sentiment-bearing words.
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    /// Raw tokens per sentence.
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    /// Complex-token ratio.
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub pct_complex_words: f64,
    /// Gunning Fog Index.
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    /// Same value as `avg_sentence_length`.
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    /// Raw tokens with more than two vowels.
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    /// Raw token count.
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    /// Mean vowels per cleaned word.
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllables_per_word: f64,
    /// Personal pronoun matches.
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: usize,
    /// Mean characters per cleaned word.
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl ReportRow {
    /// Build a row from a scored document and its URL (empty if unknown).
    pub fn new(document: &DocumentScores, url: impl Into<String>) -> Self {
        let s = &document.scores;
        Self {
            url_id: document.id.clone(),
            url: url.into(),
            positive_score: s.positive_score,
            negative_score: s.negative_score,
            polarity_score: s.polarity_score,
            subjectivity_score: s.subjectivity_score,
            avg_sentence_length: s.avg_sentence_length,
            pct_complex_words: s.pct_complex_words,
            fog_index: s.fog_index,
            avg_words_per_sentence: s.avg_sentence_length,
            complex_word_count: s.complex_word_count,
            word_count: s.word_count,
            syllables_per_word: s.avg_syllables_per_word,
            personal_pronouns: s.personal_pronoun_count,
            avg_word_length: s.avg_word_length,
        }
    }

    /// Cell values in [`COLUMNS`] order.
    pub fn values(&self) -> [String; 15] {
        [
            self.url_id.clone(),
            self.url.clone(),
            self.positive_score.to_string(),
            self.negative_score.to_string(),
            self.polarity_score.to_string(),
            self.subjectivity_score.to_string(),
            self.avg_sentence_length.to_string(),
            self.pct_complex_words.to_string(),
            self.fog_index.to_string(),
            self.avg_words_per_sentence.to_string(),
            self.complex_word_count.to_string(),
            self.word_count.to_string(),
            self.syllables_per_word.to_string(),
            self.personal_pronouns.to_string(),
            self.avg_word_length.to_string(),
        ]
    }
}

/// Write a header line followed by one line per row.
pub fn write_csv<W: Write>(mut writer: W, rows: &[ReportRow]) -> io::Result<()> {
    write_record(&mut writer, COLUMNS.iter().copied())?;
    for row in rows {
        let values = row.values();
        write_record(&mut writer, values.iter().map(String::as_str))?;
    }
    writer.flush()
}

fn write_record<'a, W: Write>(
    writer: &mut W,
    cells: impl IntoIterator<Item = &'a str>,
) -> io::Result<()> {
    let line: Vec<String> = cells.into_iter().map(quote_cell).collect();
    writeln!(writer, "{}", line.join(","))
}

/// Quote a cell if it contains a delimiter, quote, or line break.
fn quote_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
