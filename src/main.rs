use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use support_report_lib::{
    count_by_priority, load_config, ParserConfig, PartialParserConfig, RecommendationParser,
};

/// Extract ranked IT support recommendations from raw model output
#[derive(Parser, Debug)]
#[command(name = "support-report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File containing the model response (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Parser config file (.yaml, .yml or .toml)
    #[arg(long, env = "SUPPORT_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Fence tag that marks a recommendation block
    #[arg(long)]
    block_tag: Option<String>,

    /// Skip the numbered/bulleted line scan when no block yields a record
    #[arg(long)]
    no_line_fallback: bool,

    /// Print the full parse report instead of just the recommendations
    #[arg(long)]
    report: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => load_config(path)?,
        None => ParserConfig::default(),
    };
    let overrides = PartialParserConfig {
        block_tag: cli.block_tag.clone(),
        line_fallback: cli.no_line_fallback.then_some(false),
        ..Default::default()
    };
    let parser = RecommendationParser::new(overrides.apply_to(base))?;

    let raw = read_input(cli.input.as_ref())?;
    let report = parser.parse_detailed(&raw);

    let counts = count_by_priority(&report.recommendations);
    log::info!(
        "{} recommendations via {:?} (critical: {}, high: {}, medium: {}, low: {}, unknown: {})",
        counts.total(),
        report.source,
        counts.critical,
        counts.high,
        counts.medium,
        counts.low,
        counts.unknown
    );

    let output = match (cli.report, cli.pretty) {
        (true, true) => serde_json::to_string_pretty(&report)?,
        (true, false) => serde_json::to_string(&report)?,
        (false, true) => serde_json::to_string_pretty(&report.recommendations)?,
        (false, false) => serde_json::to_string(&report.recommendations)?,
    };
    println!("{}", output);

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read model output from stdin")?;
            Ok(buffer)
        }
    }
}
