//! Level payment for a fixed-rate annuity

use crate::config::{validate_principal, MAX_TERM_MONTHS, MIN_PRINCIPAL, MONTHS_PER_YEAR};
use crate::error::{CalcError, Result};

/// Round a monetary amount to cents
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Calculate the fixed monthly payment that returns `principal` plus profit
/// over `term_months` at `annual_rate`.
///
/// payment = P * r / (1 - (1 + r)^-n), with r = annual_rate / 12.
///
/// # Returns
/// * The payment rounded to cents, or `InvalidInput` if the principal is below
///   the minimum, non-finite or non-positive, or the rate/term are out of range
pub fn compute_fixed_payment(principal: f64, annual_rate: f64, term_months: u32) -> Result<f64> {
    validate_principal(principal, MIN_PRINCIPAL)?;
    if !annual_rate.is_finite() || annual_rate <= 0.0 {
        return Err(CalcError::invalid("annual_rate", "must be a positive number"));
    }
    if term_months == 0 || term_months > MAX_TERM_MONTHS {
        return Err(CalcError::invalid(
            "term_months",
            format!("must be between 1 and {}", MAX_TERM_MONTHS),
        ));
    }

    let r = annual_rate / f64::from(MONTHS_PER_YEAR);
    Ok(round_cents(annuity_payment(principal, r, term_months)))
}

/// Unrounded annuity payment for a periodic rate; inputs are assumed valid
pub(crate) fn annuity_payment(principal: f64, periodic_rate: f64, periods: u32) -> f64 {
    if periodic_rate == 0.0 {
        return principal / f64::from(periods);
    }
    principal * periodic_rate / (1.0 - (1.0 + periodic_rate).powi(-(periods as i32)))
}
