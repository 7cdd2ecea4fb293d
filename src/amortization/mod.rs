//! Amortization engine: level payment, monthly schedule and yearly summaries

mod payment;
mod schedule;
mod summary;

pub(crate) use payment::annuity_payment;
pub use payment::{compute_fixed_payment, round_cents};
pub use schedule::{generate_schedule, MonthlyRecord};
pub use summary::{aggregate_yearly, summarize_totals, TotalsSummary, YearlySummary};
