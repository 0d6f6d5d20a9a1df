//! Estimate command - device energy use and emissions.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use carbontrackr_core::devices::{AcTonnage, DEVICE_TYPES, DeviceUsage, ac_watts, estimate_fleet};

/// Arguments for the estimate command.
#[derive(Args)]
pub struct EstimateArgs {
    /// JSON file with a list of devices ({name, watts, hours_per_day, is_ac})
    #[arg(required_unless_present = "catalog")]
    input: Option<PathBuf>,

    /// Print the device catalog and AC power table instead of estimating
    #[arg(long, conflicts_with = "input")]
    catalog: bool,

    /// Emit the estimate as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: EstimateArgs) -> anyhow::Result<()> {
    if args.catalog {
        print_catalog();
        return Ok(());
    }

    let input = args
        .input
        .ok_or_else(|| anyhow::anyhow!("a devices JSON file is required"))?;
    let content = fs::read_to_string(&input)?;
    let usages: Vec<DeviceUsage> = serde_json::from_str(&content)?;

    let fleet = estimate_fleet(&usages);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&fleet)?);
        return Ok(());
    }

    for device in &fleet.devices {
        println!(
            "{:<20} {:>8} kWh/day {:>8} kg CO₂/day",
            device.name, device.energy_kwh_per_day, device.co2_kg_per_day
        );
    }
    println!();
    println!("Total energy:     {} kWh/day", fleet.total_kwh_per_day);
    println!("Total emissions:  {} kg CO₂/day", fleet.total_co2_kg_per_day);
    println!(
        "Monthly:          {} kg CO₂",
        fleet.total_co2_kg_per_month
    );
    println!("{} {}", style("→").cyan(), fleet.band.advice());

    Ok(())
}

fn print_catalog() {
    println!("{}", style("Device presets").bold());
    for device in &DEVICE_TYPES {
        let presets: Vec<String> = device
            .presets
            .iter()
            .map(|p| format!("{} {}W", p.label, p.watts))
            .collect();
        println!("{:<16} {}", device.id, presets.join(", "));
    }

    println!();
    println!("{}", style("AC power table (watts)").bold());
    println!("{:<8} {:>6} {:>6} {:>6} {:>6} {:>6}", "ton", "1★", "2★", "3★", "4★", "5★");
    for tonnage in [AcTonnage::One, AcTonnage::OneAndHalf, AcTonnage::Two] {
        let row: Vec<String> = (1..=5)
            .filter_map(|stars| ac_watts(tonnage, stars))
            .map(|w| format!("{:>6}", w))
            .collect();
        println!("{:<8} {}", tonnage, row.join(" "));
    }
}
