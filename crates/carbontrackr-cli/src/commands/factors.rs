//! Factors command - inspect the emission factor table.

use clap::Args;
use console::style;
use serde_json::json;

use super::{load_config, load_factor_table};

/// Arguments for the factors command.
#[derive(Args)]
pub struct FactorsArgs {
    /// Show the resolved factor for a single region
    region: Option<String>,

    /// Emit the table as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: FactorsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let table = load_factor_table(&config)?;

    if let Some(region) = &args.region {
        let factor = table.factor_for(region);
        if args.json {
            println!(
                "{}",
                json!({
                    "region": region,
                    "factor": factor,
                    "fallback": !table.contains(region),
                })
            );
        } else {
            println!("{} kg CO₂/kWh", factor);
            if !table.contains(region) {
                println!(
                    "{} unknown region, using the {} average",
                    style("ℹ").blue(),
                    table.default_region()
                );
            }
        }
        return Ok(());
    }

    let mut entries: Vec<_> = table.entries().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    if args.json {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .into_iter()
            .map(|(region, factor)| (region.to_string(), json!(factor)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for (region, factor) in entries {
            let marker = if region == table.default_region() {
                " (default)"
            } else {
                ""
            };
            println!("{:<20} {}{}", region, factor, marker);
        }
    }

    Ok(())
}
