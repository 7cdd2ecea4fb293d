//! Month-by-month amortization schedule

use super::payment::{annuity_payment, round_cents};
use crate::config::CalculationInput;
use serde::{Deserialize, Serialize};

/// Drift above this is logged when the final balance is clamped
const CLAMP_WARN_THRESHOLD: f64 = 0.01;

/// One monthly payout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Month of the term (1-indexed)
    pub month_index: u32,

    /// Return earned on the outstanding balance this month
    pub profit_portion: f64,

    /// Amount of the original investment returned this month
    pub principal_portion: f64,

    /// profit_portion + principal_portion
    pub payment_amount: f64,

    /// Outstanding balance after this month's payment
    pub remaining_principal_after: f64,
}

/// Generate the full schedule for a validated input.
///
/// Every amount is rounded to cents as it is computed. The last month's
/// remaining balance is clamped to zero to absorb the accumulated rounding
/// drift, so the principal portions sum to the principal within
/// `term_months` cents.
pub fn generate_schedule(input: &CalculationInput) -> Vec<MonthlyRecord> {
    let r = input.monthly_rate();
    let payment = round_cents(annuity_payment(input.principal, r, input.term_months));

    log::debug!(
        "schedule: principal={:.2} rate={} term={} payment={:.2}",
        input.principal,
        input.annual_rate,
        input.term_months,
        payment
    );

    let mut remaining = input.principal;
    let mut schedule = Vec::with_capacity(input.term_months as usize);

    for month_index in 1..=input.term_months {
        let profit_portion = round_cents(remaining * r);
        let principal_portion = round_cents(payment - profit_portion);
        remaining = round_cents(remaining - principal_portion);

        schedule.push(MonthlyRecord {
            month_index,
            profit_portion,
            principal_portion,
            payment_amount: payment,
            remaining_principal_after: remaining,
        });
    }

    if let Some(last) = schedule.last_mut() {
        if last.remaining_principal_after.abs() > CLAMP_WARN_THRESHOLD {
            log::warn!(
                "clamping residual balance of {:.2} in month {}",
                last.remaining_principal_after,
                last.month_index
            );
        }
        last.remaining_principal_after = 0.0;
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;
    use approx::assert_abs_diff_eq;

    fn schedule_for(principal: f64) -> Vec<MonthlyRecord> {
        generate_schedule(&CalculationInput::new(principal).unwrap())
    }

    #[test]
    fn test_reference_first_month() {
        let schedule = schedule_for(30_000.0);
        let first = schedule[0];

        assert_eq!(first.month_index, 1);
        assert_abs_diff_eq!(first.profit_portion, 300.00, epsilon = 1e-9);
        assert_abs_diff_eq!(first.principal_portion, 367.33, epsilon = 1e-9);
        assert_abs_diff_eq!(first.payment_amount, 667.33, epsilon = 1e-9);
        assert_abs_diff_eq!(first.remaining_principal_after, 29_632.67, epsilon = 1e-9);
    }

    #[test]
    fn test_length_and_final_balance() {
        for principal in [30_000.0, 45_250.50, 100_000.0, 123_456.78, 1_000_000.0] {
            let schedule = schedule_for(principal);
            assert_eq!(schedule.len(), 60);
            assert_eq!(schedule.last().unwrap().remaining_principal_after, 0.0);

            let returned: f64 = schedule.iter().map(|m| m.principal_portion).sum();
            assert!(
                (returned - principal).abs() <= 0.60,
                "principal {} returned {}",
                principal,
                returned
            );
        }
    }

    #[test]
    fn test_largest_principal_stays_within_tolerance() {
        let schedule = schedule_for(crate::config::MAX_PRINCIPAL);
        let returned: f64 = schedule.iter().map(|m| m.principal_portion).sum();
        assert!((returned - crate::config::MAX_PRINCIPAL).abs() <= 0.60);
    }

    #[test]
    fn test_constant_payment_and_split() {
        let schedule = schedule_for(75_000.0);
        let payment = schedule[0].payment_amount;

        for (i, month) in schedule.iter().enumerate() {
            assert_eq!(month.month_index, i as u32 + 1);
            assert_eq!(month.payment_amount, payment);
            assert_abs_diff_eq!(
                month.profit_portion + month.principal_portion,
                payment,
                epsilon = 0.005
            );
        }

        // Profit shrinks as the balance is returned
        assert!(schedule[59].profit_portion < schedule[0].profit_portion);
        assert!(schedule[59].principal_portion > schedule[0].principal_portion);
    }

    #[test]
    fn test_idempotent() {
        let input = CalculationInput::new(88_888.88).unwrap();
        assert_eq!(generate_schedule(&input), generate_schedule(&input));
    }

    #[test]
    fn test_custom_term() {
        let config = CalculatorConfig { term_months: 24, ..Default::default() };
        let input = CalculationInput::from_config(50_000.0, &config).unwrap();
        let schedule = generate_schedule(&input);

        assert_eq!(schedule.len(), 24);
        assert_eq!(schedule[23].remaining_principal_after, 0.0);
    }
}
