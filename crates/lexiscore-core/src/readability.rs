//! Readability scoring using the Gunning Fog Index.
//!
//! Formula: `0.4 * (words/sentences + complex_words/words)`
//!
//! Scores the *raw* text: stop words and punctuation tokens count as words,
//! and sentences come from [`text::split_sentences`]. A word is complex when
//! it contains more than two vowel characters, a vowel-count proxy rather
//! than a syllable count.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Weight applied to the Fog Index sum.
pub const FOG_WEIGHT: f64 = 0.4;

/// Vowel characters counted by the complex-word rule, lowercase.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Result of readability analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityScores {
    /// Words per sentence, 0 when there are no sentences.
    pub avg_sentence_length: f64,
    /// Complex words divided by words, 0 when there are no words.
    pub pct_complex_words: f64,
    /// Gunning Fog Index.
    pub fog_index: f64,
    /// Tokens with more than two vowels.
    pub complex_word_count: usize,
    /// Raw tokens, punctuation included.
    pub word_count: usize,
    /// Sentences detected.
    pub sentence_count: usize,
}

/// Score readability of raw, uncleaned text.
///
/// Never fails: empty input scores zero everywhere.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn score_readability(text: &str) -> ReadabilityScores {
    let sentence_count = text::split_sentences(text).len();
    let words = text::word_tokenize(text);
    let word_count = words.len();
    let complex_word_count = words.iter().filter(|w| is_complex_word(w)).count();

    let avg_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };
    let pct_complex_words = if word_count > 0 {
        complex_word_count as f64 / word_count as f64
    } else {
        0.0
    };
    let fog_index = FOG_WEIGHT * (avg_sentence_length + pct_complex_words);

    tracing::debug!(sentence_count, word_count, complex_word_count, fog_index, "readability scored");

    ReadabilityScores {
        avg_sentence_length,
        pct_complex_words,
        fog_index,
        complex_word_count,
        word_count,
        sentence_count,
    }
}

/// Number of `a e i o u` characters in `word`, ignoring case.
pub fn count_vowels(word: &str) -> usize {
    word.chars()
        .filter(|c| VOWELS.contains(&c.to_ascii_lowercase()))
        .count()
}

/// A word with more than two vowel characters.
pub fn is_complex_word(word: &str) -> bool {
    count_vowels(word) > 2
}
