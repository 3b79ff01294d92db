//! Dictionary-based sentiment scoring.
//!
//! Polarity: `(pos - neg) / (pos + neg + ε)`, in [-1, 1].
//! Subjectivity: `(pos + neg) / (words + ε)`, in [0, 1].
//!
//! A word listed in both dictionaries counts toward both scores.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Guard added to sentiment denominators so empty input scores 0.
pub const EPSILON: f64 = 0.000_001;

/// Result of sentiment scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentScores {
    /// Cleaned words found in the positive dictionary.
    pub positive_score: usize,
    /// Cleaned words found in the negative dictionary.
    pub negative_score: usize,
    /// Net direction of sentiment.
    pub polarity_score: f64,
    /// Share of cleaned words that carry sentiment.
    pub subjectivity_score: f64,
}

/// Score cleaned words against the positive and negative dictionaries.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn score_sentiment(
    words: &[String],
    positive_words: &HashSet<String>,
    negative_words: &HashSet<String>,
) -> SentimentScores {
    let positive_score = words
        .iter()
        .filter(|w| positive_words.contains(w.as_str()))
        .count();
    let negative_score = words
        .iter()
        .filter(|w| negative_words.contains(w.as_str()))
        .count();

    let pos = positive_score as f64;
    let neg = negative_score as f64;
    let polarity_score = (pos - neg) / (pos + neg + EPSILON);
    let subjectivity_score = (pos + neg) / (words.len() as f64 + EPSILON);

    tracing::debug!(positive_score, negative_score, "sentiment scored");

    SentimentScores {
        positive_score,
        negative_score,
        polarity_score,
        subjectivity_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn counts_hits_and_derives_ratios() {
        let scores = score_sentiment(
            &words(&["good", "good", "bad"]),
            &set(&["good"]),
            &set(&["bad"]),
        );
        assert_eq!(scores.positive_score, 2);
        assert_eq!(scores.negative_score, 1);
        assert!((scores.polarity_score - 1.0 / 3.0).abs() < 1e-6);
        assert!((scores.subjectivity_score - 1.0).abs() < 1e-6);
        assert!(scores.subjectivity_score < 1.0);
    }

    #[test]
    fn empty_words_score_zero() {
        let scores = score_sentiment(&[], &set(&["good"]), &set(&["bad"]));
        assert_eq!(scores.positive_score, 0);
        assert_eq!(scores.negative_score, 0);
        assert_eq!(scores.polarity_score, 0.0);
        assert_eq!(scores.subjectivity_score, 0.0);
    }

    #[test]
    fn neutral_words_lower_subjectivity() {
        let scores = score_sentiment(
            &words(&["good", "table", "chair", "lamp"]),
            &set(&["good"]),
            &set(&["bad"]),
        );
        assert!((scores.subjectivity_score - 0.25).abs() < 1e-6);
        assert!((scores.polarity_score - 1.0).abs() < 1e-5);
    }

    #[test]
    fn overlapping_dictionaries_count_twice() {
        let scores = score_sentiment(&words(&["mixed"]), &set(&["mixed"]), &set(&["mixed"]));
        assert_eq!(scores.positive_score, 1);
        assert_eq!(scores.negative_score, 1);
        assert_eq!(scores.polarity_score, 0.0);
        // Overlap can push subjectivity above 1.
        assert!(scores.subjectivity_score > 1.0);
    }

    #[test]
    fn scores_stay_in_range_without_overlap() {
        let pos = set(&["up", "gain"]);
        let neg = set(&["down", "loss"]);
        let samples = [
            vec!["up"],
            vec!["down", "down", "loss"],
            vec!["up", "down", "flat", "gain", "loss"],
            vec!["flat", "flat"],
        ];
        for sample in samples {
            let scores = score_sentiment(&words(&sample), &pos, &neg);
            assert!((-1.0..=1.0).contains(&scores.polarity_score));
            assert!((0.0..=1.0).contains(&scores.subjectivity_score));
        }
    }
}
