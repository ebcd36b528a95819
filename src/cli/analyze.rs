//! Analyze command - score product JSON and render reports

use crate::config::ProjectConfig;
use crate::input::parse_products;
use crate::reporters::{self, JsonOptions, OutputFormat, Scored};
use crate::scoring::{HealthScorer, ScoreBreakdown};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Read the whole input, from a file or `-` for stdin
fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read product JSON from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))
    }
}

/// Run the analyze command
pub fn run(
    config: &ProjectConfig,
    input: &Path,
    format: &str,
    output_path: Option<&Path>,
    json_options: JsonOptions,
    explain_score: bool,
    fail_under: Option<u8>,
) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let raw = read_input(input)?;
    let products = parse_products(&raw)
        .with_context(|| format!("Invalid product input in {}", input.display()))?;
    info!("Scoring {} product(s)", products.len());

    let scorer = HealthScorer::new(&config.scoring);
    let breakdowns: Vec<ScoreBreakdown> = products.par_iter().map(|p| scorer.calculate(p)).collect();

    let items: Vec<Scored<'_>> = products
        .iter()
        .zip(&breakdowns)
        .map(|(product, breakdown)| Scored {
            product,
            report: &breakdown.report,
        })
        .collect();

    let mut output = reporters::report_with_format(&items, format, json_options)?;

    if explain_score {
        let explanation: Vec<String> = breakdowns.iter().map(|b| scorer.explain(b)).collect();
        let explanation = explanation.join("\n\n");
        if format == OutputFormat::Json {
            // keep stdout parseable
            eprintln!("{}", explanation);
        } else {
            output.push('\n');
            output.push_str(&explanation);
        }
    }

    match output_path {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Report written to: {}", path.display());
        }
        None => println!("{}", output),
    }

    check_fail_threshold(fail_under, &breakdowns);
    Ok(())
}

/// Exit with code 1 when any score is below the threshold
fn check_fail_threshold(fail_under: Option<u8>, breakdowns: &[ScoreBreakdown]) {
    let Some(threshold) = fail_under else {
        return;
    };
    let lowest = breakdowns.iter().map(|b| b.report.score).min();
    debug!("Lowest score {:?}, threshold {}", lowest, threshold);
    if let Some(lowest) = lowest.filter(|s| *s < threshold) {
        eprintln!(
            "Failing due to --fail-under={} (lowest score {})",
            threshold, lowest
        );
        std::process::exit(1);
    }
}
