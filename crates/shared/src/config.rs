//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
///
/// Every section has defaults, so an empty environment reproduces the
/// standard demo run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report output configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Sample data configuration.
    #[serde(default)]
    pub sample: SampleConfig,
    /// Figures used by the financial demo printout.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Where reports are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory that relative report paths resolve against.
    #[serde(default = "default_output_directory")]
    pub directory: String,
    /// File name of the user report.
    #[serde(default = "default_user_report")]
    pub user_report: String,
    /// File name of the transaction summary.
    #[serde(default = "default_transaction_summary")]
    pub transaction_summary: String,
}

fn default_output_directory() -> String {
    ".".to_string()
}

fn default_user_report() -> String {
    "user_report.txt".to_string()
}

fn default_transaction_summary() -> String {
    "transaction_summary.txt".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            user_report: default_user_report(),
            transaction_summary: default_transaction_summary(),
        }
    }
}

/// Sample data generation.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleConfig {
    /// Number of random transactions to generate.
    #[serde(default = "default_transaction_count")]
    pub transaction_count: u32,
    /// Fixed RNG seed; unset means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_transaction_count() -> u32 {
    15
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            transaction_count: default_transaction_count(),
            seed: None,
        }
    }
}

/// Inputs for the savings-rate and compound-growth demo.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Monthly income.
    #[serde(default = "default_monthly_income")]
    pub monthly_income: Decimal,
    /// Monthly expenses.
    #[serde(default = "default_monthly_expenses")]
    pub monthly_expenses: Decimal,
    /// Initial investment.
    #[serde(default = "default_principal")]
    pub principal: Decimal,
    /// Annual growth rate as a fraction (0.07 = 7%).
    #[serde(default = "default_annual_rate")]
    pub annual_rate: Decimal,
    /// Investment horizon in whole years.
    #[serde(default = "default_years")]
    pub years: u32,
}

fn default_monthly_income() -> Decimal {
    Decimal::new(5000, 0)
}

fn default_monthly_expenses() -> Decimal {
    Decimal::new(3200, 0)
}

fn default_principal() -> Decimal {
    Decimal::new(1000, 0)
}

fn default_annual_rate() -> Decimal {
    Decimal::new(7, 2) // 0.07
}

fn default_years() -> u32 {
    10
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            monthly_income: default_monthly_income(),
            monthly_expenses: default_monthly_expenses(),
            principal: default_principal(),
            annual_rate: default_annual_rate(),
            years: default_years(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `TALLY__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if a source cannot be read or parsed, or
    /// [`AppError::Validation`] if the loaded values are unusable.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("TALLY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the report file names are usable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a report file name is blank or
    /// both reports would be written to the same file.
    pub fn validate(&self) -> AppResult<()> {
        let output = &self.output;
        if output.user_report.trim().is_empty() {
            return Err(AppError::Validation(
                "output.user_report must not be empty".to_string(),
            ));
        }
        if output.transaction_summary.trim().is_empty() {
            return Err(AppError::Validation(
                "output.transaction_summary must not be empty".to_string(),
            ));
        }
        if output.user_report == output.transaction_summary {
            return Err(AppError::Validation(format!(
                "output.user_report and output.transaction_summary both name {}",
                output.user_report
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.output.directory, ".");
        assert_eq!(config.output.user_report, "user_report.txt");
        assert_eq!(config.output.transaction_summary, "transaction_summary.txt");
        assert_eq!(config.sample.transaction_count, 15);
        assert!(config.sample.seed.is_none());
        assert_eq!(config.demo.monthly_income, dec!(5000));
        assert_eq!(config.demo.monthly_expenses, dec!(3200));
        assert_eq!(config.demo.principal, dec!(1000));
        assert_eq!(config.demo.annual_rate, dec!(0.07));
        assert_eq!(config.demo.years, 10);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(
            [
                "RUN_MODE",
                "TALLY__SAMPLE__TRANSACTION_COUNT",
                "TALLY__SAMPLE__SEED",
                "TALLY__OUTPUT__DIRECTORY",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.sample.transaction_count, 15);
                assert!(config.sample.seed.is_none());
                assert_eq!(config.output.directory, ".");
            },
        );
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("TALLY__SAMPLE__TRANSACTION_COUNT", Some("20")),
                ("TALLY__SAMPLE__SEED", Some("42")),
                ("TALLY__OUTPUT__DIRECTORY", Some("reports")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.sample.transaction_count, 20);
                assert_eq!(config.sample.seed, Some(42));
                assert_eq!(config.output.directory, "reports");
                assert_eq!(config.output.user_report, "user_report.txt");
            },
        );
    }

    #[test]
    fn test_load_rejects_malformed_values() {
        temp_env::with_var("TALLY__SAMPLE__TRANSACTION_COUNT", Some("many"), || {
            let err = AppConfig::load().unwrap_err();
            assert_eq!(err.error_code(), "CONFIG_ERROR");
        });
    }

    #[test]
    fn test_load_rejects_clashing_report_files() {
        temp_env::with_vars(
            [
                ("TALLY__OUTPUT__USER_REPORT", Some("report.txt")),
                ("TALLY__OUTPUT__TRANSACTION_SUMMARY", Some("report.txt")),
            ],
            || {
                let err = AppConfig::load().unwrap_err();
                assert!(matches!(err, AppError::Validation(_)));
            },
        );
    }

    #[rstest::rstest]
    #[case("", "summary.txt")]
    #[case("users.txt", "   ")]
    #[case("same.txt", "same.txt")]
    fn test_validate_rejects(#[case] user_report: &str, #[case] transaction_summary: &str) {
        let mut config = AppConfig::default();
        config.output.user_report = user_report.to_string();
        config.output.transaction_summary = transaction_summary.to_string();
        assert_eq!(config.validate().unwrap_err().error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
