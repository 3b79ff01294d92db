//! Sentence splitting, word tokenization, and cleaning.
//!
//! Two tokenization paths live here and must stay separate:
//!
//! - [`split_sentences`] + [`word_tokenize`] produce the *raw* token stream:
//!   every word, stop word, and punctuation mark, with original casing. The
//!   readability scorer consumes this.
//! - [`clean_words`] builds on the raw stream and keeps only lowercase,
//!   purely alphabetic, non-stop-word tokens. The sentiment and lexical
//!   scorers consume this.
//!
//! Word tokenization follows Penn Treebank conventions: punctuation becomes
//! its own token, the sentence-final period is split off, clitics (`n't`,
//! `'s`, `'ll`, ...) are separated, and fused forms like `cannot` are split.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::dictionaries::abbreviations::is_abbreviation;

/// Initials such as `J`, `J.K`, `u.s` (final period already removed).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:[a-z]\.)*[a-z]$").expect("valid regex"));

/// A regex substitution applied to a whole sentence.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rules(table: &[(&str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|&(pattern, replacement)| Rule {
            pattern: Regex::new(pattern).expect("valid regex"),
            replacement,
        })
        .collect()
}

/// Opening quotes, applied first.
static STARTING_QUOTES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r"([«“‘„]|[`]+)", " ${1} "),
        (r#"^""#, "``"),
        (r"(``)", " ${1} "),
        (r#"([ (\[{<])("|'{2})"#, "${1} `` "),
    ])
});

/// Punctuation, including the sentence-final period.
static PUNCTUATION: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r#"([^.])(\.)([\]\)}>"'»”’ ]*)\s*$"#, "${1} ${2} ${3} "),
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])$", " ${1} "),
        (r"\.{2,}", " ${0} "),
        (r"[;@#$%&]", " ${0} "),
        (r#"([^.])(\.)([\]\)}>"']*)\s*$"#, "${1} ${2}${3} "),
        (r"[?!]", " ${0} "),
        (r"([^'])' ", "${1} ' "),
        (r"[*]", " ${0} "),
        (r"[\]\[\(\)\{\}<>]", " ${0} "),
        (r"--", " -- "),
    ])
});

/// Closing quotes and clitics; expects the sentence padded with spaces.
static ENDING_QUOTES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r"([»”’])", " ${1} "),
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    ])
});

/// Fused forms split into two tokens.
static CONTRACTIONS: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        (r"(?i)\b(wan)(na)\b", " ${1} ${2} "),
        (r"(?i) ('t)(is)\b", " ${1} ${2} "),
        (r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ])
});

/// Split text into sentences with abbreviation, initial, decimal, and URL awareness.
///
/// A run of terminators (`.`, `!`, `?`) plus any closing quotes or brackets
/// ends a sentence only when followed by whitespace or the end of the text,
/// so `3.14`, `example.com`, and `U.S.A` never split. A period after a known
/// abbreviation or an initial does not split either, and an ellipsis splits
/// only before a capitalized word. Any other period ends the sentence even
/// when the next word is lowercase.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);

        let closes_run = is_sentence_terminator(ch)
            || (is_closer(ch) && last_terminator(&chars, i).is_some());
        if closes_run && !continues_run(&chars, i) && is_sentence_boundary(&chars, i) {
            push_sentence(&mut sentences, &current);
            current.clear();
        }
    }

    push_sentence(&mut sentences, &current);
    sentences
}

/// Tokenize raw text into words and punctuation, preserving case.
///
/// Sentences are split first and each one is tokenized on its own, so only
/// sentence-final periods are separated from the preceding word.
pub fn word_tokenize(text: &str) -> Vec<String> {
    split_sentences(text)
        .iter()
        .flat_map(|sentence| tokenize_sentence(sentence))
        .collect()
}

/// Tokenize one sentence with Treebank rules.
pub fn tokenize_sentence(sentence: &str) -> Vec<String> {
    let mut text = apply_rules(sentence.to_string(), &STARTING_QUOTES);
    text = apply_rules(text, &PUNCTUATION);
    text = apply_rules(format!(" {text} "), &ENDING_QUOTES);
    text = apply_rules(text, &CONTRACTIONS);
    text.split_whitespace().map(str::to_string).collect()
}

/// Lowercase, tokenize, and keep alphabetic tokens that are not stop words.
///
/// Deterministic: the same text and stop-word set always produce the same
/// sequence, in left-to-right order.
#[tracing::instrument(skip_all, fields(text_len = text.len(), stop_words = stop_words.len()))]
pub fn clean_words(text: &str, stop_words: &HashSet<String>) -> Vec<String> {
    word_tokenize(text)
        .into_iter()
        .map(|token| token.to_lowercase())
        .filter(|token| is_alphabetic_word(token) && !stop_words.contains(token))
        .collect()
}

/// Render cleaned words back to text.
///
/// `clean_words(&join_words(&words), sw)` returns `words` unchanged.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}

/// A non-empty token made only of alphabetic characters.
pub fn is_alphabetic_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

fn apply_rules(mut text: String, rules: &[Rule]) -> String {
    for rule in rules {
        text = rule
            .pattern
            .replace_all(&text, rule.replacement)
            .into_owned();
    }
    text
}

fn push_sentence(sentences: &mut Vec<String>, current: &str) {
    let sentence = current.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}

/// The next character extends the current terminator run.
fn continues_run(chars: &[char], pos: usize) -> bool {
    chars
        .get(pos + 1)
        .is_some_and(|&c| is_sentence_terminator(c) || is_closer(c))
}

/// Index of the last terminator in the run ending at `pos`.
fn last_terminator(chars: &[char], pos: usize) -> Option<usize> {
    let mut i = pos;
    loop {
        let c = chars[i];
        if is_sentence_terminator(c) {
            return Some(i);
        }
        if !is_closer(c) || i == 0 {
            return None;
        }
        i -= 1;
    }
}

fn is_sentence_boundary(chars: &[char], run_end: usize) -> bool {
    let Some(term_pos) = last_terminator(chars, run_end) else {
        return false;
    };

    let Some(&after) = chars.get(run_end + 1) else {
        return true;
    };
    if !after.is_whitespace() {
        return false;
    }

    if chars[term_pos] != '.' {
        return true;
    }

    // Ellipsis mid-sentence
    if term_pos > 0 && chars[term_pos - 1] == '.' {
        return next_word_is_capitalized(chars, run_end);
    }

    // Only abbreviations and initials absorb a period; after any other word
    // it ends the sentence whatever the case of the next word.
    let word = word_before(chars, term_pos);
    !(is_abbreviation(&word) || INITIALS_PATTERN.is_match(&word))
}

fn next_word_is_capitalized(chars: &[char], run_end: usize) -> bool {
    chars[run_end + 1..]
        .iter()
        .find(|c| !c.is_whitespace())
        .is_none_or(|c| c.is_uppercase())
}

/// The word (letters, digits, inner periods) directly before `pos`.
fn word_before(chars: &[char], pos: usize) -> String {
    let start = chars[..pos]
        .iter()
        .rposition(|c| !(c.is_alphanumeric() || *c == '.'))
        .map_or(0, |i| i + 1);
    chars[start..pos].iter().collect()
}
