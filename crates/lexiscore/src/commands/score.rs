//! Score command: every metric for a single saved article.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lexiscore_core::config::Config;
use lexiscore_core::{DocumentScores, ScoreRecord, corpus};

use super::{LexiconArgs, read_input_file};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Article file: title on the first line, body after it.
    pub file: Utf8PathBuf,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

/// Score one article file.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing score command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let lexicon = args.lexicon.load(config)?;

    let id = args.file.file_stem().unwrap_or_default();
    let document = corpus::parse_article(id, &content);
    let result = DocumentScores::score(&document, &lexicon);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_scores(&result);
    }

    Ok(())
}

fn print_scores(result: &DocumentScores) {
    let ScoreRecord {
        positive_score,
        negative_score,
        polarity_score,
        subjectivity_score,
        avg_sentence_length,
        pct_complex_words,
        fog_index,
        complex_word_count,
        word_count,
        syllable_count,
        personal_pronoun_count,
        avg_word_length,
        avg_syllables_per_word,
    } = result.scores;

    println!("{}", result.id.bold());
    if !result.title.is_empty() {
        println!("{}", result.title.dimmed());
    }

    println!(
        "\n  {} +{} / -{}, polarity {:.3}, subjectivity {:.3}",
        "Sentiment:".cyan(),
        positive_score,
        negative_score,
        polarity_score,
        subjectivity_score,
    );
    println!(
        "  {} fog {:.2}, {:.1} words/sentence, {:.1}% complex ({} of {})",
        "Readability:".cyan(),
        fog_index,
        avg_sentence_length,
        pct_complex_words * 100.0,
        complex_word_count,
        word_count,
    );
    println!(
        "  {} {} syllables ({:.2}/word), avg length {:.2}, {} personal pronouns",
        "Lexical:".cyan(),
        syllable_count,
        avg_syllables_per_word,
        avg_word_length,
        personal_pronoun_count,
    );
}
