//! Abbreviations that do not end a sentence when followed by a period.
//!
//! Entries are lowercase and stored without their final period. Short
//! everyday words ("sat", "no", "mar") are left out on purpose: article
//! prose uses them as words far more often than as abbreviations.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations that suppress a sentence break.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "hon", "esq", "capt", "col", "gen",
        "lt", "maj", "sgt", "gov", "sen", "rep", "pres",
    ]);

    // Latin and reference shorthand
    set.extend([
        "etc", "vs", "e.g", "i.e", "cf", "viz", "al", "approx", "fig", "figs", "vol", "pp", "ed",
        "eds", "ch", "sec", "ref",
    ]);

    // Degrees and eras
    set.extend(["ph.d", "m.d", "b.a", "m.a", "b.sc", "m.sc", "a.m", "p.m", "b.c", "a.d"]);

    // Months
    set.extend([
        "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    ]);

    // Organizations and places
    set.extend([
        "inc", "corp", "ltd", "llc", "co", "bros", "dept", "univ", "assn", "st", "ave", "blvd",
        "u.s", "u.k", "u.s.a", "e.u",
    ]);

    // Units and quantities
    set.extend(["nos", "est", "hr", "hrs", "yr", "yrs", "km", "kg"]);

    set
});

/// Whether `word` (without its final period, any case) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.contains(word.to_lowercase().as_str())
}
