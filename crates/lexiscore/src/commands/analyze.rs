//! Analyze command: score every article in a directory and write the report.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lexiscore_core::config::{Config, DEFAULT_ARTICLE_DIR};
use lexiscore_core::{ReportRow, analyze_corpus_with, corpus, write_csv};

use super::LexiconArgs;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Directory of `<URL_ID>.txt` article files.
    #[arg(long, value_name = "DIR")]
    pub articles: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub lexicon: LexiconArgs,

    /// `URL_ID,URL` index used to fill the URL column.
    #[arg(long, value_name = "FILE")]
    pub urls: Option<Utf8PathBuf>,

    /// Write the CSV report here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

/// Score the article corpus and emit one row per document.
#[instrument(name = "cmd_analyze", skip_all)]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let article_dir = args
        .articles
        .clone()
        .or_else(|| config.article_dir.clone())
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_ARTICLE_DIR));
    let url_index_path = args.urls.clone().or_else(|| config.url_index.clone());
    let output = args.output.clone().or_else(|| config.output_file.clone());

    debug!(articles = %article_dir, urls = ?url_index_path, output = ?output, "executing analyze command");

    let lexicon = args.lexicon.load(config)?;
    let documents = corpus::load_documents(&article_dir, max_input_bytes)
        .with_context(|| format!("failed to load articles from {article_dir}"))?;
    let urls = match url_index_path {
        Some(ref path) => corpus::load_url_index(path)
            .with_context(|| format!("failed to load URL index {path}"))?,
        None => BTreeMap::new(),
    };

    let progress = if quiet || global_json {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(documents.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        bar
    };

    let scored = analyze_corpus_with(&documents, &lexicon, |doc| {
        progress.set_message(doc.id.clone());
        progress.inc(1);
    });
    progress.finish_and_clear();

    let rows: Vec<ReportRow> = scored
        .iter()
        .map(|doc| ReportRow::new(doc, urls.get(&doc.id).cloned().unwrap_or_default()))
        .collect();

    if let Some(ref path) = output {
        let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
        write_csv(BufWriter::new(file), &rows).with_context(|| format!("failed to write {path}"))?;
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if let Some(ref path) = output {
        println!(
            "{} scored {} documents, wrote {}",
            "OK:".green(),
            rows.len(),
            path.cyan()
        );
    } else {
        write_csv(io::stdout().lock(), &rows).context("failed to write report to stdout")?;
    }

    Ok(())
}
