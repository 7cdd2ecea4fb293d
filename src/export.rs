//! CSV export of schedules, yearly summaries and portfolio periods

use crate::amortization::{MonthlyRecord, YearlySummary};
use crate::error::Result;
use crate::portfolio::PeriodReport;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the monthly schedule with a header row
pub fn write_schedule<W: Write>(writer: W, schedule: &[MonthlyRecord]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(["Month", "Profit", "Principal", "Payment", "RemainingPrincipal"])?;

    for row in schedule {
        csv_writer.write_record(&[
            row.month_index.to_string(),
            format!("{:.2}", row.profit_portion),
            format!("{:.2}", row.principal_portion),
            format!("{:.2}", row.payment_amount),
            format!("{:.2}", row.remaining_principal_after),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the yearly summaries with a header row
pub fn write_yearly<W: Write>(writer: W, years: &[YearlySummary]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(["Year", "PrincipalReturned", "ProfitEarned", "TotalEarnings"])?;

    for row in years {
        csv_writer.write_record(&[
            row.year_index.to_string(),
            format!("{:.2}", row.principal_returned),
            format!("{:.2}", row.profit_earned),
            format!("{:.2}", row.total_earnings),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write portfolio simulation periods with a header row
pub fn write_periods<W: Write>(writer: W, periods: &[PeriodReport]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record([
        "Period",
        "TotalPaymentReceived",
        "InterestCollected",
        "PrincipalRepaid",
        "ActiveLoans",
        "CashAvailable",
        "TotalLoansIssued",
    ])?;

    for row in periods {
        csv_writer.write_record(&[
            row.period.to_string(),
            format!("{:.2}", row.total_payment_received),
            format!("{:.2}", row.interest_collected),
            format!("{:.2}", row.principal_repaid),
            row.active_loans.to_string(),
            format!("{:.2}", row.cash_available),
            row.total_loans_issued.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Create `path` and write the monthly schedule to it
pub fn write_schedule_file(path: &Path, schedule: &[MonthlyRecord]) -> Result<()> {
    write_schedule(File::create(path)?, schedule)
}

pub fn write_yearly_file(path: &Path, years: &[YearlySummary]) -> Result<()> {
    write_yearly(File::create(path)?, years)
}

pub fn write_periods_file(path: &Path, periods: &[PeriodReport]) -> Result<()> {
    write_periods(File::create(path)?, periods)
}
