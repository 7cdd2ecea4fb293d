//! Reinvesting portfolio simulation

mod engine;
mod state;

pub use engine::{PeriodReport, PortfolioEngine, PortfolioResult};
pub use state::{Loan, PortfolioState};
