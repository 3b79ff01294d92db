//! Stop-word and master-dictionary loading.
//!
//! A [`Lexicon`] bundles the three word sets every scorer reads: stop words,
//! positive words, and negative words. It is built once per run and shared
//! by reference; nothing mutates it afterwards.
//!
//! Sources are whitespace-split with no case folding. Each file is decoded as
//! UTF-8 first and re-decoded as Latin-1 if that fails, so legacy-encoded
//! dictionaries never abort a load.

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{LexiconError, LexiconResult};

/// File name of the positive word list inside the master-dictionary directory.
pub const POSITIVE_WORDS_FILE: &str = "positive-words.txt";

/// File name of the negative word list inside the master-dictionary directory.
pub const NEGATIVE_WORDS_FILE: &str = "negative-words.txt";

/// Stop words plus positive and negative dictionaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    positive_words: HashSet<String>,
    negative_words: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from in-memory word sets.
    pub fn new<S, P, N>(stop_words: S, positive_words: P, negative_words: N) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            stop_words: stop_words.into_iter().map(Into::into).collect(),
            positive_words: positive_words.into_iter().map(Into::into).collect(),
            negative_words: negative_words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load stop words from `stop_words_dir` and the dictionaries from
    /// `master_dict_dir`.
    ///
    /// Fails without returning a partial lexicon if any source is missing
    /// or unreadable.
    #[tracing::instrument(skip_all, fields(stop_words_dir = %stop_words_dir, master_dict_dir = %master_dict_dir))]
    pub fn load(stop_words_dir: &Utf8Path, master_dict_dir: &Utf8Path) -> LexiconResult<Self> {
        let stop_words = load_stop_words(stop_words_dir)?;
        let (positive_words, negative_words) = load_master_dictionary(master_dict_dir)?;

        tracing::info!(
            stop_words = stop_words.len(),
            positive_words = positive_words.len(),
            negative_words = negative_words.len(),
            "lexicon loaded"
        );

        Ok(Self {
            stop_words,
            positive_words,
            negative_words,
        })
    }

    /// Words dropped by the cleaner.
    pub const fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    /// Words that count toward the positive score.
    pub const fn positive_words(&self) -> &HashSet<String> {
        &self.positive_words
    }

    /// Words that count toward the negative score.
    pub const fn negative_words(&self) -> &HashSet<String> {
        &self.negative_words
    }
}

/// Merge every regular file in `dir` into one stop-word set.
///
/// Files are visited in name order.
#[tracing::instrument(skip_all, fields(dir = %dir))]
pub fn load_stop_words(dir: &Utf8Path) -> LexiconResult<HashSet<String>> {
    let entries = dir
        .read_dir_utf8()
        .map_err(|e| LexiconError::from_io(dir, e))?;

    let mut files: Vec<Utf8PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LexiconError::from_io(dir, e))?;
        let is_file = entry
            .file_type()
            .map_err(|e| LexiconError::from_io(entry.path(), e))?
            .is_file();
        if is_file {
            files.push(entry.into_path());
        }
    }
    files.sort();

    let mut words = HashSet::new();
    for file in &files {
        let before = words.len();
        words.extend(read_word_list(file)?);
        tracing::debug!(file = %file, added = words.len() - before, "stop-word source merged");
    }
    Ok(words)
}

/// Load `positive-words.txt` and `negative-words.txt` from `dir`.
#[tracing::instrument(skip_all, fields(dir = %dir))]
pub fn load_master_dictionary(dir: &Utf8Path) -> LexiconResult<(HashSet<String>, HashSet<String>)> {
    let positive = read_word_list(&dir.join(POSITIVE_WORDS_FILE))?;
    let negative = read_word_list(&dir.join(NEGATIVE_WORDS_FILE))?;
    Ok((positive, negative))
}

/// Read one whitespace-separated word list.
pub fn read_word_list(path: &Utf8Path) -> LexiconResult<HashSet<String>> {
    let bytes = std::fs::read(path).map_err(|e| LexiconError::from_io(path, e))?;
    let text = decode_text(bytes);
    Ok(text.split_whitespace().map(str::to_string).collect())
}

/// Decode bytes as UTF-8, falling back to Latin-1 on invalid input.
///
/// Latin-1 maps each byte to the code point of the same value, so the
/// fallback accepts any byte sequence.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(
                valid_up_to = err.utf8_error().valid_up_to(),
                "not UTF-8, decoding as Latin-1"
            );
            err.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn utf8_dir(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()
    }

    fn write_master_dict(dir: &Utf8Path, positive: &[u8], negative: &[u8]) {
        fs::write(dir.join(POSITIVE_WORDS_FILE), positive).unwrap();
        fs::write(dir.join(NEGATIVE_WORDS_FILE), negative).unwrap();
    }

    #[test]
    fn decode_utf8_passes_through() {
        assert_eq!(decode_text("café naïve".as_bytes().to_vec()), "café naïve");
    }

    #[test]
    fn decode_falls_back_to_latin1() {
        // 0xE9 is 'é' in Latin-1 and an invalid lone byte in UTF-8.
        let text = decode_text(vec![b'c', b'a', b'f', 0xE9, b' ', b'x']);
        assert_eq!(text, "café x");
    }

    #[test]
    fn decode_never_fails_on_arbitrary_bytes() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode_text(bytes).chars().count(), 256);
    }

    #[test]
    fn stop_words_merge_across_files() {
        let tmp = TempDir::new().unwrap();
        let dir = utf8_dir(&tmp);
        fs::write(dir.join("StopWords_Generic.txt"), "the\nand\nof\n").unwrap();
        fs::write(dir.join("StopWords_Names.txt"), "SMITH | Surnames\nand\n").unwrap();

        let words = load_stop_words(&dir).unwrap();
        assert!(words.contains("the"));
        assert!(words.contains("of"));
        // No case folding and no punctuation stripping at load time.
        assert!(words.contains("SMITH"));
        assert!(words.contains("|"));
        assert!(!words.contains("smith"));
        assert_eq!(words.len(), 6);
    }

    #[test]
    fn stop_words_skip_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let dir = utf8_dir(&tmp);
        fs::write(dir.join("a.txt"), "alpha").unwrap();
        fs::create_dir(dir.join("nested")).unwrap();

        let words = load_stop_words(&dir).unwrap();
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn missing_stop_word_dir_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let missing = utf8_dir(&tmp).join("nope");
        let err = load_stop_words(&missing).unwrap_err();
        assert!(matches!(err, LexiconError::NotFound { ref path } if *path == missing));
    }

    #[test]
    fn master_dictionary_loads_both_lists() {
        let tmp = TempDir::new().unwrap();
        let dir = utf8_dir(&tmp);
        write_master_dict(&dir, b"good great\nexcellent\n", b"bad\npoor awful");

        let (pos, neg) = load_master_dictionary(&dir).unwrap();
        assert_eq!(pos.len(), 3);
        assert_eq!(neg.len(), 3);
        assert!(pos.contains("excellent"));
        assert!(neg.contains("awful"));
    }

    #[test]
    fn master_dictionary_latin1_file_loads() {
        let tmp = TempDir::new().unwrap();
        let dir = utf8_dir(&tmp);
        write_master_dict(&dir, b"good\n", b"bad\nna\xefve\n");

        let (_, neg) = load_master_dictionary(&dir).unwrap();
        assert!(neg.contains("naïve"));
        assert!(neg.contains("bad"));
    }

    #[test]
    fn missing_negative_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let dir = utf8_dir(&tmp);
        fs::write(dir.join(POSITIVE_WORDS_FILE), "good").unwrap();

        let err = load_master_dictionary(&dir).unwrap_err();
        assert!(
            matches!(err, LexiconError::NotFound { ref path } if path.ends_with(NEGATIVE_WORDS_FILE))
        );
    }

    #[test]
    fn load_builds_full_lexicon() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_dir(&tmp);
        let stop_dir = root.join("StopWords");
        let dict_dir = root.join("MasterDictionary");
        fs::create_dir_all(&stop_dir).unwrap();
        fs::create_dir_all(&dict_dir).unwrap();
        fs::write(stop_dir.join("generic.txt"), "the a an").unwrap();
        write_master_dict(&dict_dir, b"good", b"bad good");

        let lexicon = Lexicon::load(&stop_dir, &dict_dir).unwrap();
        assert_eq!(lexicon.stop_words().len(), 3);
        // Overlap between the dictionaries is kept.
        assert!(lexicon.positive_words().contains("good"));
        assert!(lexicon.negative_words().contains("good"));
    }

    #[test]
    fn load_fails_when_dictionary_missing() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_dir(&tmp);
        let stop_dir = root.join("StopWords");
        fs::create_dir_all(&stop_dir).unwrap();

        let result = Lexicon::load(&stop_dir, &root.join("MasterDictionary"));
        assert!(matches!(result, Err(LexiconError::NotFound { .. })));
    }

    #[test]
    fn new_collects_borrowed_words() {
        let lexicon = Lexicon::new(["the"], ["good"], ["bad"]);
        assert!(lexicon.stop_words().contains("the"));
        assert!(lexicon.positive_words().contains("good"));
        assert!(lexicon.negative_words().contains("bad"));
    }
}
