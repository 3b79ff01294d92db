//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

use lexiscore_core::Lexicon;
use lexiscore_core::config::{Config, DEFAULT_MASTER_DICT_DIR, DEFAULT_STOP_WORDS_DIR};

pub mod analyze;
pub mod info;
pub mod readability;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;

/// Lexicon location flags shared by the scoring commands.
#[derive(Args, Debug, Default, Clone)]
pub struct LexiconArgs {
    /// Directory of stop-word files.
    #[arg(long, value_name = "DIR")]
    pub stop_words: Option<Utf8PathBuf>,

    /// Directory holding positive-words.txt and negative-words.txt.
    #[arg(long, value_name = "DIR")]
    pub master_dict: Option<Utf8PathBuf>,
}

impl LexiconArgs {
    /// Stop-word directory: flag, then config, then the default.
    pub fn stop_words_dir(&self, config: &Config) -> Utf8PathBuf {
        self.stop_words
            .clone()
            .or_else(|| config.stop_words_dir.clone())
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STOP_WORDS_DIR))
    }

    /// Master-dictionary directory: flag, then config, then the default.
    pub fn master_dict_dir(&self, config: &Config) -> Utf8PathBuf {
        self.master_dict
            .clone()
            .or_else(|| config.master_dict_dir.clone())
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_MASTER_DICT_DIR))
    }

    /// Load the lexicon from the resolved directories.
    pub fn load(&self, config: &Config) -> anyhow::Result<Lexicon> {
        let stop_dir = self.stop_words_dir(config);
        let dict_dir = self.master_dict_dir(config);
        Lexicon::load(&stop_dir, &dict_dir)
            .with_context(|| format!("failed to load lexicon from {stop_dir} and {dict_dir}"))
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}
