//! Error types shared by the calculator, config loader and exporters

use thiserror::Error;

/// Errors raised by the calculator
#[derive(Debug, Error)]
pub enum CalcError {
    /// Input rejected before any computation was performed
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Schedule cannot be split into whole years; indicates a caller defect
    #[error("malformed schedule: {len} months is not a whole number of {months_per_year}-month years")]
    MalformedSchedule { len: usize, months_per_year: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for errors caused by caller-supplied values
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = CalcError::invalid("principal", "must be at least 30000.00");
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "invalid input for `principal`: must be at least 30000.00"
        );
    }

    #[test]
    fn test_malformed_schedule_message() {
        let err = CalcError::MalformedSchedule { len: 13, months_per_year: 12 };
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("13 months"));
    }
}
