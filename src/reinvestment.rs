//! Months until accumulated profit can fund another investment

use crate::amortization::{round_cents, MonthlyRecord};
use serde::{Deserialize, Serialize};

/// Result of the reinvestment estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinvestmentEstimate {
    pub threshold: f64,

    /// First month at which cumulative profit reaches the threshold;
    /// `None` if it is never reached within the term
    pub months_until_threshold: Option<u32>,
}

impl ReinvestmentEstimate {
    pub fn from_schedule(schedule: &[MonthlyRecord], threshold: f64) -> Self {
        Self {
            threshold,
            months_until_threshold: estimate_reinvestment_month(schedule, threshold),
        }
    }

    pub fn reached(&self) -> bool {
        self.months_until_threshold.is_some()
    }
}

/// Find the first month where the running profit total is at least `threshold`
pub fn estimate_reinvestment_month(schedule: &[MonthlyRecord], threshold: f64) -> Option<u32> {
    let mut cumulative = 0.0;
    for month in schedule {
        cumulative = round_cents(cumulative + month.profit_portion);
        if cumulative >= threshold {
            return Some(month.month_index);
        }
    }
    None
}
