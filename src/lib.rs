//! ROI Calculator - amortization engine for fixed-rate investment payouts
//!
//! This library provides:
//! - Level monthly payment and month-by-month amortization schedules
//! - Yearly aggregation and term totals
//! - Reinvestment estimate (months until profit can fund a new investment)
//! - Multi-term simulation of a portfolio that reinvests its payouts
//! - CSV export of schedules and simulation periods

pub mod amortization;
pub mod calculator;
pub mod config;
pub mod error;
pub mod export;
pub mod portfolio;
pub mod reinvestment;

// Re-export commonly used types
pub use amortization::{
    aggregate_yearly, compute_fixed_payment, generate_schedule, MonthlyRecord, TotalsSummary,
    YearlySummary,
};
pub use calculator::{CalculationReport, Calculator};
pub use config::{CalculationInput, CalculatorConfig};
pub use error::{CalcError, Result};
pub use portfolio::{PeriodReport, PortfolioEngine, PortfolioResult};
pub use reinvestment::{estimate_reinvestment_month, ReinvestmentEstimate};
