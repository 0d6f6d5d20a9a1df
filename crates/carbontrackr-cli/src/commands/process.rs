//! Process command - extract consumption and emissions from a single bill.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use tracing::info;

use carbontrackr_core::{BillParser, BillReport, PointsPolicy, TrackrConfig};
use carbontrackr_vision::{GatewayClient, TextExtractor};
use rust_decimal::Decimal;

use super::{load_config, load_factor_table};

/// Environment variable holding the vision gateway API key.
const API_KEY_VAR: &str = "CARBONTRACKR_API_KEY";

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Bill text file ("-" for stdin)
    #[arg(required_unless_present = "image_url")]
    input: Option<PathBuf>,

    /// Fetch bill text through the vision gateway instead of a local file
    #[arg(long, conflicts_with = "input")]
    image_url: Option<String>,

    /// Region used for the emission factor lookup
    #[arg(short, long, default_value = "India")]
    region: String,

    /// Points policy (default: from config)
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PolicyArg {
    Consumption,
    Emissions,
}

impl From<PolicyArg> for PointsPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Consumption => PointsPolicy::Consumption,
            PolicyArg::Emissions => PointsPolicy::Emissions,
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
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

    let text = read_bill_text(&args, &config).await?;
    let report = parser.process(&text, &args.region);

    if report.units.is_none() {
        eprintln!(
            "{} unable to detect consumption; please retry with a clearer bill image",
            style("!").yellow()
        );
    }

    let rendered = render_report(&report, args.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            println!(
                "{} Report written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    info!("processed in {} ms", start.elapsed().as_millis());
    Ok(())
}

async fn read_bill_text(args: &ProcessArgs, config: &TrackrConfig) -> anyhow::Result<String> {
    if let Some(image_url) = &args.image_url {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| anyhow::anyhow!("{} must be set to use --image-url", API_KEY_VAR))?;

        let client = GatewayClient::new(
            &api_key,
            &config.vision.base_url,
            &config.vision.model,
            Duration::from_secs(config.vision.timeout_secs),
            config.vision.max_retries,
        )?;

        return Ok(client.extract_text(image_url).await?);
    }

    let input = args
        .input
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("either an input file or --image-url is required"))?;

    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(fs::read_to_string(input)?)
}

fn render_report(report: &BillReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record([
                "units_kwh",
                "carbon_emissions_kg",
                "emission_factor",
                "region",
                "points",
            ])?;
            writer.write_record([
                report.units.map(|d| d.to_string()).unwrap_or_default(),
                report
                    .carbon_emissions_kg
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                report.emission_factor.to_string(),
                report.region.clone(),
                report.points.map(|p| p.to_string()).unwrap_or_default(),
            ])?;
            let data = writer
                .into_inner()
                .map_err(|err| anyhow::anyhow!("failed to flush CSV: {}", err))?;
            Ok(String::from_utf8(data)?)
        }
        OutputFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &BillReport) -> String {
    let mut out = String::new();

    match report.units {
        Some(units) => out.push_str(&format!("Units consumed:   {} kWh\n", units)),
        None => out.push_str("Units consumed:   not detected\n"),
    }
    out.push_str(&format!(
        "Emission factor:  {} kg CO₂/kWh ({})\n",
        report.emission_factor, report.region
    ));
    match report.carbon_emissions_kg {
        Some(kg) => out.push_str(&format!("Emissions:        {:.2} kg CO₂\n", kg)),
        None => out.push_str("Emissions:        unknown\n"),
    }
    match report.points {
        Some(points) => out.push_str(&format!("Points earned:    {}\n", points)),
        None => out.push_str("Points earned:    none\n"),
    }

    if !report.warnings.is_empty() {
        out.push_str("Warnings:\n");
        for warning in &report.warnings {
            out.push_str(&format!("  - {}\n", warning));
        }
    }

    out
}
