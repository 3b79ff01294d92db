//! First-person pronouns counted by the lexical scorer.

use regex::Regex;
use std::sync::LazyLock;

/// Pronouns counted as personal pronouns, matched case-insensitively.
pub const PERSONAL_PRONOUNS: &[&str] = &["I", "we", "my", "ours", "us"];

/// Whole-word, case-insensitive alternation over [`PERSONAL_PRONOUNS`].
pub static PERSONAL_PRONOUN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = PERSONAL_PRONOUNS.join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("valid regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_words_only() {
        let hits: Vec<&str> = PERSONAL_PRONOUN_PATTERN
            .find_iter("We told us about myself and ourselves in my house")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(hits, vec!["We", "us", "my"]);
    }
}
