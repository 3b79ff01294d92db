//! Word-level statistics over cleaned words.
//!
//! Syllables are approximated by vowel count, the same proxy the
//! complex-word rule in [`crate::readability`] uses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::pronouns::PERSONAL_PRONOUN_PATTERN;
use crate::readability::count_vowels;
use crate::text::join_words;

/// Result of lexical statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LexicalScores {
    /// Vowel characters across all words.
    pub syllable_count: usize,
    /// Whole-word matches of I, we, my, ours, us.
    pub personal_pronoun_count: usize,
    /// Mean characters per word.
    pub avg_word_length: f64,
    /// Mean vowel count per word.
    pub avg_syllables_per_word: f64,
}

/// Compute lexical statistics for cleaned words.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn score_lexical(words: &[String]) -> LexicalScores {
    let syllable_count: usize = words.iter().map(|w| count_vowels(w)).sum();
    let personal_pronoun_count = count_personal_pronouns(words);
    let char_count: usize = words.iter().map(|w| w.chars().count()).sum();

    let (avg_word_length, avg_syllables_per_word) = if words.is_empty() {
        (0.0, 0.0)
    } else {
        let n = words.len() as f64;
        (char_count as f64 / n, syllable_count as f64 / n)
    };

    LexicalScores {
        syllable_count,
        personal_pronoun_count,
        avg_word_length,
        avg_syllables_per_word,
    }
}

/// Count personal pronouns in the space-joined words.
pub fn count_personal_pronouns(words: &[String]) -> usize {
    PERSONAL_PRONOUN_PATTERN
        .find_iter(&join_words(words))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn beautiful_has_five_vowels() {
        let scores = score_lexical(&words(&["beautiful"]));
        assert_eq!(scores.syllable_count, 5);
        assert!((scores.avg_syllables_per_word - 5.0).abs() < f64::EPSILON);
        assert!((scores.avg_word_length - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pronouns_match_whole_words() {
        let cleaned = words(&["i", "love", "us", "and", "myself"]);
        assert_eq!(count_personal_pronouns(&cleaned), 2);
        assert_eq!(score_lexical(&cleaned).personal_pronoun_count, 2);
    }

    #[test]
    fn empty_words_score_zero() {
        let scores = score_lexical(&[]);
        assert_eq!(scores.syllable_count, 0);
        assert_eq!(scores.personal_pronoun_count, 0);
        assert_eq!(scores.avg_word_length, 0.0);
        assert_eq!(scores.avg_syllables_per_word, 0.0);
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        let scores = score_lexical(&words(&["café", "go"]));
        assert!((scores.avg_word_length - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn averages_over_several_words() {
        // sky: 0, tree: 2, idea: 3
        let scores = score_lexical(&words(&["sky", "tree", "idea"]));
        assert_eq!(scores.syllable_count, 5);
        assert!((scores.avg_syllables_per_word - 5.0 / 3.0).abs() < 1e-12);
        assert!((scores.avg_word_length - 11.0 / 3.0).abs() < 1e-12);
    }
}
