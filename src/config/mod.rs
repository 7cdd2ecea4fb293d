//! Calculator parameters and validated calculation input

pub mod loader;

use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};

/// Fixed annual rate of return (12%)
pub const DEFAULT_ANNUAL_RATE: f64 = 0.12;

/// Payout term in months (5 years)
pub const DEFAULT_TERM_MONTHS: u32 = 60;

/// Smallest principal the calculator accepts
pub const MIN_PRINCIPAL: f64 = 30_000.0;

/// Largest principal for which f64 cent rounding stays exact
pub const MAX_PRINCIPAL: f64 = 1e12;

/// Longest accepted term (100 years)
pub const MAX_TERM_MONTHS: u32 = 1_200;

/// Longest portfolio simulation horizon (100 years)
pub const MAX_SIMULATED_PERIODS: u32 = 1_200;

/// Cumulative profit at which a new investment can be funded
pub const DEFAULT_REINVESTMENT_THRESHOLD: f64 = 30_000.0;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Number of full terms the reinvesting portfolio is simulated for
pub const DEFAULT_SIMULATED_TERMS: u32 = 3;

/// Tunable calculator parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Annual rate as a decimal (0.12 for 12%)
    pub annual_rate: f64,

    /// Number of monthly payments
    pub term_months: u32,

    /// Minimum accepted principal
    pub min_principal: f64,

    /// Months grouped into one yearly summary. Only affects grouping; the
    /// monthly rate is always annual_rate / 12.
    pub months_per_year: u32,

    /// Cumulative profit target for the reinvestment estimate
    pub reinvestment_threshold: f64,

    /// Full terms covered by the portfolio simulation
    pub simulated_terms: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            annual_rate: DEFAULT_ANNUAL_RATE,
            term_months: DEFAULT_TERM_MONTHS,
            min_principal: MIN_PRINCIPAL,
            months_per_year: MONTHS_PER_YEAR,
            reinvestment_threshold: DEFAULT_REINVESTMENT_THRESHOLD,
            simulated_terms: DEFAULT_SIMULATED_TERMS,
        }
    }
}

impl CalculatorConfig {
    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if !self.annual_rate.is_finite() || self.annual_rate <= 0.0 {
            return Err(CalcError::invalid("annual_rate", "must be a positive number"));
        }
        if self.term_months == 0 || self.term_months > MAX_TERM_MONTHS {
            return Err(CalcError::invalid(
                "term_months",
                format!("must be between 1 and {}", MAX_TERM_MONTHS),
            ));
        }
        if self.months_per_year == 0 {
            return Err(CalcError::invalid("months_per_year", "must be at least 1"));
        }
        if !self.min_principal.is_finite() || self.min_principal <= 0.0 {
            return Err(CalcError::invalid("min_principal", "must be a positive number"));
        }
        if !self.reinvestment_threshold.is_finite() || self.reinvestment_threshold <= 0.0 {
            return Err(CalcError::invalid(
                "reinvestment_threshold",
                "must be a positive number",
            ));
        }
        match self.term_months.checked_mul(self.simulated_terms) {
            Some(periods) if periods <= MAX_SIMULATED_PERIODS => {}
            _ => {
                return Err(CalcError::invalid(
                    "simulated_terms",
                    format!(
                        "term_months x simulated_terms must not exceed {}",
                        MAX_SIMULATED_PERIODS
                    ),
                ))
            }
        }
        Ok(())
    }

    /// Periods covered by the portfolio simulation; bounded once `validate` passes
    pub fn simulated_periods(&self) -> u32 {
        self.term_months.saturating_mul(self.simulated_terms)
    }
}

/// A validated request for one amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub principal: f64,
    pub annual_rate: f64,
    pub term_months: u32,
}

impl CalculationInput {
    /// Input with the standard 12% / 60-month terms
    pub fn new(principal: f64) -> Result<Self> {
        Self::from_config(principal, &CalculatorConfig::default())
    }

    /// Input using the rate, term and minimum from `config`
    pub fn from_config(principal: f64, config: &CalculatorConfig) -> Result<Self> {
        config.validate()?;
        validate_principal(principal, config.min_principal)?;
        Ok(Self {
            principal,
            annual_rate: config.annual_rate,
            term_months: config.term_months,
        })
    }

    /// Build from a principal that may be missing (e.g. an empty form field)
    pub fn from_optional(principal: Option<f64>, config: &CalculatorConfig) -> Result<Self> {
        match principal {
            Some(p) => Self::from_config(p, config),
            None => Err(CalcError::invalid("principal", "a principal amount is required")),
        }
    }

    /// Periodic (monthly) rate
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / f64::from(MONTHS_PER_YEAR)
    }
}

/// Reject non-numeric, non-positive, below-minimum and above-maximum principals
pub fn validate_principal(principal: f64, min_principal: f64) -> Result<()> {
    if !principal.is_finite() {
        log::warn!("rejected non-numeric principal {}", principal);
        return Err(CalcError::invalid("principal", "must be a finite number"));
    }
    if principal <= 0.0 {
        log::warn!("rejected non-positive principal {}", principal);
        return Err(CalcError::invalid("principal", "must be greater than zero"));
    }
    if principal < min_principal {
        log::warn!("rejected principal {:.2} below minimum {:.2}", principal, min_principal);
        return Err(CalcError::invalid(
            "principal",
            format!("must be at least {:.2}", min_principal),
        ));
    }
    if principal > MAX_PRINCIPAL {
        log::warn!("rejected principal {:.2} above maximum {:.2}", principal, MAX_PRINCIPAL);
        return Err(CalcError::invalid(
            "principal",
            format!("must not exceed {:.2}", MAX_PRINCIPAL),
        ));
    }
    Ok(())
}
