//! Calculator front end
//!
//! Holds one validated config and produces complete reports (schedule, yearly
//! summaries, totals and reinvestment estimate) for any number of principals.

use crate::amortization::{
    aggregate_yearly, generate_schedule, summarize_totals, MonthlyRecord, TotalsSummary,
    YearlySummary,
};
use crate::config::{CalculationInput, CalculatorConfig};
use crate::error::Result;
use crate::portfolio::{PortfolioEngine, PortfolioResult};
use crate::reinvestment::ReinvestmentEstimate;
use serde::{Deserialize, Serialize};

/// Everything a view layer needs to render one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub input: CalculationInput,
    pub payment_amount: f64,
    pub schedule: Vec<MonthlyRecord>,
    pub yearly: Vec<YearlySummary>,
    pub totals: TotalsSummary,
    pub reinvestment: ReinvestmentEstimate,
}

/// Pre-configured calculator
///
/// # Example
/// ```
/// use roi_calc::Calculator;
///
/// let report = Calculator::new().run(30_000.0).unwrap();
/// assert_eq!(report.yearly.len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Calculator with the standard 12% / 60-month terms
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Validate the principal and build the full report
    pub fn run(&self, principal: f64) -> Result<CalculationReport> {
        let input = CalculationInput::from_config(principal, &self.config)?;
        let schedule = generate_schedule(&input);
        let yearly = aggregate_yearly(&schedule, self.config.months_per_year as usize)?;
        let totals = summarize_totals(&yearly);
        let reinvestment =
            ReinvestmentEstimate::from_schedule(&schedule, self.config.reinvestment_threshold);
        let payment_amount = schedule.first().map(|m| m.payment_amount).unwrap_or(0.0);

        log::info!(
            "principal {:.2}: payment {:.2}, total earnings {:.2}",
            principal,
            payment_amount,
            totals.total_earnings
        );

        Ok(CalculationReport {
            input,
            payment_amount,
            schedule,
            yearly,
            totals,
            reinvestment,
        })
    }

    /// Build reports for several principals; stops at the first invalid one
    pub fn run_batch(&self, principals: &[f64]) -> Result<Vec<CalculationReport>> {
        principals.iter().map(|&p| self.run(p)).collect()
    }

    /// Simulate a reinvesting portfolio for the configured number of terms
    pub fn simulate_portfolio(&self, principal: f64) -> Result<PortfolioResult> {
        let input = CalculationInput::from_config(principal, &self.config)?;
        let mut engine = PortfolioEngine::new(&input);
        Ok(engine.run(self.config.simulated_periods()))
    }
}
