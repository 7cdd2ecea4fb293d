//! Simulate a portfolio that reinvests its payouts into new investments
//!
//! Writes one CSV row per period and prints the total amount earned.

use anyhow::{Context, Result};
use clap::Parser;
use roi_calc::{export, Calculator, CalculatorConfig};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "simulate_portfolio")]
#[command(about = "Simulate reinvesting payouts over several full terms")]
struct Args {
    /// Principal of each investment (minimum 30000)
    principal: f64,

    /// Number of full terms to simulate (overrides ROI_SIMULATED_TERMS)
    #[arg(short, long)]
    terms: Option<u32>,

    /// Output CSV path
    #[arg(short, long, default_value = "portfolio_simulation.csv")]
    output: PathBuf,

    /// Print the result as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let mut config = CalculatorConfig::default().with_env_overrides()?;
    if let Some(terms) = args.terms {
        config.simulated_terms = terms;
    }
    let calculator = Calculator::with_config(config)?;
    let total_periods = calculator.config().simulated_periods();

    let result = calculator.simulate_portfolio(args.principal)?;

    export::write_periods_file(&args.output, &result.periods)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    if args.json {
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    println!("Output written to {}", args.output.display());
    if let Some(last) = result.final_period() {
        println!("\nPortfolio after {} periods:", last.period);
        println!("  Active loans:       {}", last.active_loans);
        println!("  Total loans issued: {}", last.total_loans_issued);
        println!("  Cash available:     ${:.2}", last.cash_available);
    }
    println!(
        "\nTotal amount earned (all payments received) over {} periods: ${:.2}",
        total_periods, result.total_earned
    );
    println!("Total interest collected: ${:.2}", result.total_interest());
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
