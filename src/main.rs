//! ROI Calculator CLI
//!
//! Computes the payout schedule for one principal and prints the yearly
//! breakdown, totals and reinvestment estimate.

use anyhow::{Context, Result};
use clap::Parser;
use roi_calc::{export, CalculationReport, Calculator, CalculatorConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roi_calc")]
#[command(about = "Amortization schedule for a fixed-rate investment payout")]
struct Args {
    /// Principal amount to invest (minimum 30000)
    principal: f64,

    /// Annual rate as a decimal (overrides config and ROI_ANNUAL_RATE)
    #[arg(long)]
    rate: Option<f64>,

    /// Term in months (overrides config and ROI_TERM_MONTHS)
    #[arg(long)]
    term_months: Option<u32>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Write the monthly schedule to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the yearly summaries to this CSV file
    #[arg(long)]
    yearly_csv: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<CalculatorConfig> {
    let config = match &args.config {
        Some(path) => CalculatorConfig::from_json_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    let mut config = config.with_env_overrides()?;

    if let Some(rate) = args.rate {
        config.annual_rate = rate;
    }
    if let Some(term) = args.term_months {
        config.term_months = term;
    }
    config.validate()?;
    Ok(config)
}

fn print_report(report: &CalculationReport) {
    println!("ROI Calculator v0.1.0");
    println!("=====================\n");

    println!("Principal:       ${:.2}", report.input.principal);
    println!("Annual rate:     {:.2}%", report.input.annual_rate * 100.0);
    println!("Term:            {} months", report.input.term_months);
    println!("Monthly payment: ${:.2}\n", report.payment_amount);

    println!("{:>4} {:>18} {:>16} {:>16}", "Year", "Principal Returned", "Profit Earned", "Total Earnings");
    println!("{}", "-".repeat(57));
    for year in &report.yearly {
        println!(
            "{:>4} {:>18.2} {:>16.2} {:>16.2}",
            year.year_index, year.principal_returned, year.profit_earned, year.total_earnings
        );
    }
    println!("{}", "-".repeat(57));
    println!(
        "{:>4} {:>18.2} {:>16.2} {:>16.2}",
        "All",
        report.totals.total_principal_returned,
        report.totals.total_profit_earned,
        report.totals.total_earnings
    );

    match report.reinvestment.months_until_threshold {
        Some(month) => println!(
            "\nProfit reaches ${:.2} in month {}",
            report.reinvestment.threshold, month
        ),
        None => println!(
            "\nProfit does not reach ${:.2} within the term",
            report.reinvestment.threshold
        ),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let calculator = Calculator::with_config(config)?;

    let report = calculator.run(args.principal)?;

    if let Some(path) = &args.csv {
        export::write_schedule_file(path, &report.schedule)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("schedule written to {}", path.display());
    }
    if let Some(path) = &args.yearly_csv {
        export::write_yearly_file(path, &report.yearly)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("yearly summary written to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
