//! Load calculator config from JSON files and environment variables
//!
//! Recognized environment variables:
//!   ROI_ANNUAL_RATE, ROI_TERM_MONTHS, ROI_MIN_PRINCIPAL,
//!   ROI_REINVEST_THRESHOLD, ROI_SIMULATED_TERMS

use super::CalculatorConfig;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

impl CalculatorConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config = Self::from_reader(BufReader::new(file))?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load from any JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ROI_*` overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_var(&lookup, "ROI_ANNUAL_RATE") {
            self.annual_rate = v;
        }
        if let Some(v) = parse_var(&lookup, "ROI_TERM_MONTHS") {
            self.term_months = v;
        }
        if let Some(v) = parse_var(&lookup, "ROI_MIN_PRINCIPAL") {
            self.min_principal = v;
        }
        if let Some(v) = parse_var(&lookup, "ROI_REINVEST_THRESHOLD") {
            self.reinvestment_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, "ROI_SIMULATED_TERMS") {
            self.simulated_terms = v;
        }
        self.validate()?;
        Ok(self)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring unparsable {}={:?}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "annual_rate": 0.10 }"#;
        let config = CalculatorConfig::from_reader(json.as_bytes()).unwrap();
        assert_eq!(config.annual_rate, 0.10);
        assert_eq!(config.term_months, 60);
        assert_eq!(config.min_principal, 30_000.0);
    }

    #[test]
    fn test_invalid_json_values_rejected() {
        let json = r#"{ "term_months": 0 }"#;
        assert!(CalculatorConfig::from_reader(json.as_bytes()).is_err());

        assert!(CalculatorConfig::from_reader("not json".as_bytes()).is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ROI_ANNUAL_RATE", "0.06"),
            ("ROI_TERM_MONTHS", "120"),
            ("ROI_SIMULATED_TERMS", "garbage"),
        ]
        .into_iter()
        .collect();

        let config = CalculatorConfig::default()
            .with_overrides(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.annual_rate, 0.06);
        assert_eq!(config.term_months, 120);
        // Unparsable value is ignored
        assert_eq!(config.simulated_terms, 3);
    }

    #[test]
    fn test_oversized_simulation_override_rejected() {
        let result = CalculatorConfig::default().with_overrides(|k| {
            (k == "ROI_SIMULATED_TERMS").then(|| "100000000".to_string())
        });
        assert!(matches!(
            result.unwrap_err(),
            crate::CalcError::InvalidInput { field: "simulated_terms", .. }
        ));
    }

    #[test]
    fn test_override_out_of_range() {
        let result = CalculatorConfig::default().with_overrides(|k| {
            (k == "ROI_ANNUAL_RATE").then(|| "-0.01".to_string())
        });
        assert!(result.is_err());
    }
}
