//! Offset command - plan carbon offsets against a target.

use clap::Args;
use console::style;
use rust_decimal::Decimal;

use carbontrackr_core::offset::{OFFSET_OPTIONS, OffsetPlan, suggested_quantity};

/// Arguments for the offset command.
#[derive(Args)]
pub struct OffsetArgs {
    /// Target emissions to offset, kg CO₂
    #[arg(short, long, default_value = "0")]
    target: Decimal,

    /// Offset purchases as ID=QTY (e.g. trees=5), repeatable
    #[arg(short, long = "pick", value_name = "ID=QTY")]
    picks: Vec<String>,

    /// List the available offset options
    #[arg(long)]
    list: bool,
}

pub fn run(args: OffsetArgs) -> anyhow::Result<()> {
    if args.list {
        for option in OFFSET_OPTIONS.iter() {
            println!(
                "{:<8} {:<14} {} kg CO₂ per {} at ${} each",
                option.id,
                option.name,
                option.co2_per_unit_kg,
                option.unit,
                option.cost_usd_per_unit
            );
        }
        return Ok(());
    }

    let mut plan = OffsetPlan::new(args.target);
    for pick in &args.picks {
        let (id, quantity) = pick
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("pick must look like trees=5, got {:?}", pick))?;
        let quantity: u64 = quantity
            .parse()
            .map_err(|_| anyhow::anyhow!("quantity in {:?} is not a whole number", pick))?;
        if !plan.add(id, quantity) {
            anyhow::bail!("unknown offset option {:?}", id);
        }
    }

    if !plan.picks().is_empty() {
        for (option, quantity) in plan.picks() {
            println!("{:>6} × {}", quantity, option.name);
        }
        println!();
        println!("Total offset:  {} kg CO₂", plan.total_offset_kg());
        println!("Total cost:    ${}", plan.total_cost_usd());
        if args.target > Decimal::ZERO {
            println!("Coverage:      {:.1}%", plan.coverage_percent());
        }
    }

    if args.target > Decimal::ZERO {
        println!();
        println!(
            "{} to fully cover {} kg CO₂:",
            style("Suggestions").bold(),
            args.target
        );
        for option in OFFSET_OPTIONS.iter() {
            let quantity = suggested_quantity(option, args.target);
            println!(
                "{:>6} {} of {} (${})",
                quantity,
                option.unit,
                option.name,
                option.cost_usd_per_unit * Decimal::from(quantity)
            );
        }
    }

    Ok(())
}
