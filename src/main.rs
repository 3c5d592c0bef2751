use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, Level};

use humanize_ident::batch::{self, BatchOptions, BatchStats};
use humanize_ident::{HumanizeRules, Humanizer, LetterCasing};

#[derive(Parser, Debug)]
#[command(name = "humanize")]
#[command(about = "Turn PascalCase, underscored and dashed identifiers into readable phrases")]
#[command(version)]
struct Args {
    /// Identifiers to humanize; lines are read from stdin when none are given
    inputs: Vec<String>,

    /// Casing applied to the result (title, lower, allcaps, sentence)
    #[arg(long, value_parser = LetterCasing::from_str)]
    casing: Option<LetterCasing>,

    /// Use the buffer path (in-place casing; title casing is rejected)
    #[arg(long)]
    in_place: bool,

    /// JSON file with separator and ignored punctuation sets
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Emit one JSON object per line
    #[arg(long)]
    json: bool,

    /// Print run statistics as JSON to stderr
    #[arg(long)]
    stats: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn load_rules(path: Option<&PathBuf>) -> Result<HumanizeRules> {
    let Some(path) = path else {
        return Ok(HumanizeRules::default());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file {}", path.display()))?;
    HumanizeRules::from_json(&json)
        .with_context(|| format!("Invalid rules file {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: logs go to stderr so stdout stays pipeable into other tools
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let rules = load_rules(args.rules.as_ref())?;
    let humanizer = Humanizer::new(rules).context("Failed to build humanizer")?;

    let options = BatchOptions {
        casing: args.casing,
        in_place: args.in_place,
        json: args.json,
    };

    let stdout = tokio::io::stdout();
    let stats: BatchStats = if args.inputs.is_empty() {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        batch::process_lines(&humanizer, stdin, stdout, &options).await?
    } else {
        batch::process_inputs(&humanizer, &args.inputs, stdout, &options).await?
    };

    if args.stats {
        eprintln!("{}", serde_json::to_string(&stats)?);
    }

    if stats.lines_failed > 0 {
        anyhow::bail!("{} line(s) could not be humanized", stats.lines_failed);
    }

    Ok(())
}
