//! Period-by-period simulation of a portfolio that reinvests its payouts

use super::state::PortfolioState;
use crate::amortization::{annuity_payment, round_cents};
use crate::config::CalculationInput;
use serde::{Deserialize, Serialize};

/// Output row for one simulated period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub period: u32,
    pub total_payment_received: f64,
    pub interest_collected: f64,
    pub principal_repaid: f64,
    pub active_loans: usize,
    pub cash_available: f64,
    pub total_loans_issued: u32,
}

/// Complete simulation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioResult {
    pub periods: Vec<PeriodReport>,

    /// Sum of all payments received (as reported, in cents)
    pub total_earned: f64,
}

impl PortfolioResult {
    pub fn final_period(&self) -> Option<&PeriodReport> {
        self.periods.last()
    }

    pub fn total_interest(&self) -> f64 {
        round_cents(self.periods.iter().map(|p| p.interest_collected).sum())
    }
}

/// Reinvesting portfolio simulator
///
/// Every loan shares the input's principal, rate and term. Payments are
/// pooled as cash and a new loan is funded whenever the cash covers a full
/// principal.
pub struct PortfolioEngine {
    principal: f64,
    periodic_rate: f64,
    payment: f64,
    state: PortfolioState,
}

impl PortfolioEngine {
    pub fn new(input: &CalculationInput) -> Self {
        let periodic_rate = input.monthly_rate();
        Self {
            principal: input.principal,
            periodic_rate,
            payment: annuity_payment(input.principal, periodic_rate, input.term_months),
            state: PortfolioState::initial(input.principal),
        }
    }

    pub fn state(&self) -> &PortfolioState {
        &self.state
    }

    /// Simulate one period
    pub fn step(&mut self) -> PeriodReport {
        self.state.advance_period();
        let period = self.state.current_period;

        let mut payment_total = 0.0;
        let mut interest_total = 0.0;
        let mut principal_total = 0.0;

        for loan in self.state.active_loans.iter_mut() {
            if !loan.pays_in(period) {
                continue;
            }

            let interest = loan.remaining_balance * self.periodic_rate;
            let mut principal_payment = self.payment - interest;
            let payment = if principal_payment > loan.remaining_balance {
                // Final payment only covers what is left
                principal_payment = loan.remaining_balance;
                principal_payment + interest
            } else {
                self.payment
            };

            loan.remaining_balance -= principal_payment;

            payment_total += payment;
            interest_total += interest;
            principal_total += principal_payment;
        }

        self.state.retire_paid_off();
        self.state.cash_balance += payment_total;

        let issued = self.state.reinvest(self.principal);
        if issued > 0 {
            log::debug!(
                "period {}: funded {} new loan(s), {} active",
                period,
                issued,
                self.state.active_loans.len()
            );
        }

        PeriodReport {
            period,
            total_payment_received: round_cents(payment_total),
            interest_collected: round_cents(interest_total),
            principal_repaid: round_cents(principal_total),
            active_loans: self.state.active_loans.len(),
            cash_available: round_cents(self.state.cash_balance),
            total_loans_issued: self.state.total_loans_issued,
        }
    }

    /// Simulate `total_periods` further periods
    pub fn run(&mut self, total_periods: u32) -> PortfolioResult {
        let periods: Vec<PeriodReport> = (0..total_periods).map(|_| self.step()).collect();
        let total_earned = round_cents(periods.iter().map(|p| p.total_payment_received).sum());

        log::info!(
            "simulated {} periods: {} loans funded, total earned {:.2}",
            periods.len(),
            self.state.total_loans_issued,
            total_earned
        );

        PortfolioResult {
            periods,
            total_earned,
        }
    }
}
