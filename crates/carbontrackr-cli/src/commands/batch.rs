//! Batch processing command for multiple bill text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use carbontrackr_core::{BillParser, BillReport, PointsPolicy};

use super::process::PolicyArg;
use super::{load_config, load_factor_table};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (bill text files)
    #[arg(required = true)]
    input: String,

    /// Region used for the emission factor lookup
    #[arg(short, long, default_value = "India")]
    region: String,

    /// Points policy (default: from config)
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Output directory for per-file JSON reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Continue when a file cannot be read
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    report: Option<BillReport>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let table = load_factor_table(&config)?;

    let policy = args
        .policy
        .map(PointsPolicy::from)
        .unwrap_or(config.points.policy);

    let parser = BillParser::new(table)
        .with_policy(policy)
        .with_ceiling(Decimal::from(config.extraction.max_plausible_kwh));

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(output_dir) = &args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let result = match fs::read_to_string(&path) {
            Ok(text) => {
                let report = parser.process(&text, &args.region);
                debug!("processed {}", path.display());
                ProcessResult {
                    path,
                    report: Some(report),
                    error: None,
                }
            }
            Err(err) => {
                if !args.continue_on_error {
                    anyhow::bail!("Failed to read {}: {}", path.display(), err);
                }
                warn!("failed to read {}: {}", path.display(), err);
                ProcessResult {
                    path,
                    report: None,
                    error: Some(err.to_string()),
                }
            }
        };

        results.push(result);
        progress.inc(1);
    }

    progress.finish_with_message("Done");

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            let Some(report) = &result.report else { continue };
            let stem = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("bill");
            let out_path = output_dir.join(format!("{}.json", stem));
            fs::write(&out_path, serde_json::to_string_pretty(report)?)?;
        }
    }

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let detected = results
        .iter()
        .filter(|r| r.report.as_ref().is_some_and(|rep| rep.units.is_some()))
        .count();
    let failed = results.iter().filter(|r| r.error.is_some()).count();

    println!(
        "{} {} processed, {} with consumption detected, {} unreadable in {:.1}s",
        style("✓").green(),
        results.len(),
        detected,
        failed,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn write_summary(path: &PathBuf, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "file",
        "units_kwh",
        "carbon_emissions_kg",
        "emission_factor",
        "points",
        "warnings",
        "error",
    ])?;

    for result in results {
        match &result.report {
            Some(report) => writer.write_record([
                result.path.display().to_string(),
                report.units.map(|d| d.to_string()).unwrap_or_default(),
                report
                    .carbon_emissions_kg
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                report.emission_factor.to_string(),
                report.points.map(|p| p.to_string()).unwrap_or_default(),
                report.warnings.join("; "),
                String::new(),
            ])?,
            None => writer.write_record([
                result.path.display().to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                result.error.clone().unwrap_or_default(),
            ])?,
        }
    }

    writer.flush()?;
    Ok(())
}
