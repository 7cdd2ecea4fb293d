//! Portfolio state tracking across periods

/// Balance below which a loan counts as fully repaid
pub const PAID_OFF_EPSILON: f64 = 1e-8;

/// A single active investment
#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    /// Period in which the loan was funded; it first pays in the next period
    pub issued_period: u32,

    /// Outstanding principal
    pub remaining_balance: f64,
}

impl Loan {
    pub fn new(issued_period: u32, principal: f64) -> Self {
        Self {
            issued_period,
            remaining_balance: principal,
        }
    }

    pub fn is_paid_off(&self) -> bool {
        self.remaining_balance <= PAID_OFF_EPSILON
    }

    /// Whether the loan makes a payment in `period`
    pub fn pays_in(&self, period: u32) -> bool {
        period > self.issued_period && !self.is_paid_off()
    }
}

/// State of the portfolio at a point in time
#[derive(Debug, Clone)]
pub struct PortfolioState {
    /// Last completed period (0 before the first step)
    pub current_period: u32,

    pub active_loans: Vec<Loan>,

    /// Loans funded so far, including the initial one
    pub total_loans_issued: u32,

    /// Payments received and not yet reinvested
    pub cash_balance: f64,
}

impl PortfolioState {
    /// Start with one loan of `principal` funded before period 1
    pub fn initial(principal: f64) -> Self {
        Self {
            current_period: 0,
            active_loans: vec![Loan::new(0, principal)],
            total_loans_issued: 1,
            cash_balance: 0.0,
        }
    }

    /// Advance to next period
    pub fn advance_period(&mut self) {
        self.current_period += 1;
    }

    /// Drop loans that are fully repaid
    pub fn retire_paid_off(&mut self) {
        self.active_loans.retain(|loan| !loan.is_paid_off());
    }

    /// Fund new loans while cash covers a full principal
    pub fn reinvest(&mut self, principal: f64) -> u32 {
        let mut issued = 0;
        while self.cash_balance >= principal {
            self.active_loans.push(Loan::new(self.current_period, principal));
            self.cash_balance -= principal;
            self.total_loans_issued += 1;
            issued += 1;
        }
        issued
    }
}
