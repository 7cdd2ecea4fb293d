//! Yearly aggregation and term totals

use super::payment::round_cents;
use super::schedule::MonthlyRecord;
use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};

/// Totals for one year of the term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    /// Year of the term (1-indexed)
    pub year_index: u32,
    pub principal_returned: f64,
    pub profit_earned: f64,
    pub total_earnings: f64,
}

/// Totals over the whole term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalsSummary {
    pub total_principal_returned: f64,
    pub total_profit_earned: f64,
    pub total_earnings: f64,
}

/// Group the schedule into consecutive years of `months_per_year` months.
///
/// Fails with `MalformedSchedule` if the schedule does not divide into whole
/// years.
pub fn aggregate_yearly(
    schedule: &[MonthlyRecord],
    months_per_year: usize,
) -> Result<Vec<YearlySummary>> {
    if months_per_year == 0 || schedule.len() % months_per_year != 0 {
        return Err(CalcError::MalformedSchedule {
            len: schedule.len(),
            months_per_year,
        });
    }

    let years = schedule
        .chunks(months_per_year)
        .enumerate()
        .map(|(i, months)| YearlySummary {
            year_index: i as u32 + 1,
            principal_returned: round_cents(months.iter().map(|m| m.principal_portion).sum()),
            profit_earned: round_cents(months.iter().map(|m| m.profit_portion).sum()),
            total_earnings: round_cents(months.iter().map(|m| m.payment_amount).sum()),
        })
        .collect();

    Ok(years)
}

/// Sum the yearly summaries into term totals
pub fn summarize_totals(years: &[YearlySummary]) -> TotalsSummary {
    TotalsSummary {
        total_principal_returned: round_cents(years.iter().map(|y| y.principal_returned).sum()),
        total_profit_earned: round_cents(years.iter().map(|y| y.profit_earned).sum()),
        total_earnings: round_cents(years.iter().map(|y| y.total_earnings).sum()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::generate_schedule;
    use crate::config::CalculationInput;
    use approx::assert_abs_diff_eq;

    fn schedule_for(principal: f64) -> Vec<MonthlyRecord> {
        generate_schedule(&CalculationInput::new(principal).unwrap())
    }

    #[test]
    fn test_five_years() {
        let schedule = schedule_for(30_000.0);
        let years = aggregate_yearly(&schedule, 12).unwrap();

        assert_eq!(years.len(), 5);
        for (i, year) in years.iter().enumerate() {
            assert_eq!(year.year_index, i as u32 + 1);
        }

        // 12 x 667.33
        assert_abs_diff_eq!(years[0].total_earnings, 8007.96, epsilon = 1e-6);
        assert!(years[0].profit_earned > years[4].profit_earned);
    }

    #[test]
    fn test_earnings_match_monthly_payments() {
        let schedule = schedule_for(123_456.78);
        let years = aggregate_yearly(&schedule, 12).unwrap();

        let yearly: f64 = years.iter().map(|y| y.total_earnings).sum();
        let monthly: f64 = schedule.iter().map(|m| m.payment_amount).sum();
        assert_abs_diff_eq!(yearly, monthly, epsilon = 0.005);
    }

    #[test]
    fn test_totals_invariants() {
        for principal in [30_000.0, 64_321.09, 500_000.0] {
            let schedule = schedule_for(principal);
            let totals = summarize_totals(&aggregate_yearly(&schedule, 12).unwrap());

            assert!((totals.total_principal_returned - principal).abs() <= 0.60);
            assert_abs_diff_eq!(
                totals.total_earnings,
                totals.total_principal_returned + totals.total_profit_earned,
                epsilon = 0.015
            );
        }
    }

    #[test]
    fn test_malformed_schedule() {
        let schedule = schedule_for(30_000.0);

        let err = aggregate_yearly(&schedule[..59], 12).unwrap_err();
        assert!(matches!(
            err,
            CalcError::MalformedSchedule { len: 59, months_per_year: 12 }
        ));

        assert!(aggregate_yearly(&schedule, 0).is_err());
        assert!(aggregate_yearly(&schedule, 7).is_err());
    }

    #[test]
    fn test_other_grouping() {
        let schedule = schedule_for(30_000.0);
        let quarters = aggregate_yearly(&schedule, 3).unwrap();
        assert_eq!(quarters.len(), 20);
    }

    #[test]
    fn test_empty_schedule() {
        let years = aggregate_yearly(&[], 12).unwrap();
        assert!(years.is_empty());
        let totals = summarize_totals(&years);
        assert_eq!(totals.total_earnings, 0.0);
    }
}
