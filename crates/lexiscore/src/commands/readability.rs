//! Readability command: Gunning Fog Index scoring.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use lexiscore_core::{ReadabilityScores, score_readability};

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Maximum acceptable Fog Index.
    #[arg(long)]
    pub max_fog: Option<f64>,
}

#[derive(Serialize)]
struct ReadabilityReport {
    #[serde(flatten)]
    scores: ReadabilityScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_fog: Option<f64>,
    over_max: bool,
}

/// Score readability of a file using the Gunning Fog Index.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config_max_fog: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_fog = ?args.max_fog, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let max_fog = args.max_fog.or(config_max_fog);
    let scores = score_readability(&content);
    let report = ReadabilityReport {
        scores,
        max_fog,
        over_max: max_fog.is_some_and(|max| scores.fog_index > max),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.over_max {
        let max = report.max_fog.unwrap_or(0.0);
        bail!(
            "{} has Fog Index {:.1} (max: {:.1}). Shorten sentences or use fewer long words.",
            args.file,
            scores.fog_index,
            max,
        );
    } else if let Some(max) = report.max_fog {
        println!(
            "{} {} has Fog Index {:.1} (max: {:.1})",
            "PASS:".green(),
            args.file,
            scores.fog_index,
            max,
        );
    } else {
        println!("{:.1}", scores.fog_index);
    }

    Ok(())
}
