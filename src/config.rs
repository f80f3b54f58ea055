use anyhow::Result;
use std::env;

use crate::storage::models::ExtraPayPolicy;

/// Payroll policy knobs. The source console used slightly different defaults
/// on different pages; these make the choice explicit and overridable.
#[derive(Debug, Clone)]
pub struct Config {
    /// Divisor converting overtime hours into day-equivalents.
    pub standard_hours: f64,
    /// Hours credited per overtime-flagged attendance day when seeding the
    /// calculator from the ledger.
    pub overtime_unit_hours: f64,
    /// How holiday-worked days and overtime hours combine into extra pay.
    pub extra_pay_policy: ExtraPayPolicy,
    /// Directory used by the file-backed key-value store.
    pub data_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading
    /// .env files). Useful for testing where the environment is controlled
    /// directly.
    pub fn from_env_only() -> Result<Self> {
        Ok(Config {
            standard_hours: env::var("STAFFDESK_STANDARD_HOURS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10.0),
            overtime_unit_hours: env::var("STAFFDESK_OVERTIME_UNIT_HOURS")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .unwrap_or(2.0),
            extra_pay_policy: env::var("STAFFDESK_EXTRA_PAY_POLICY")
                .unwrap_or_else(|_| "additive".to_string())
                .parse()
                .unwrap_or(ExtraPayPolicy::Additive),
            data_dir: env::var("STAFFDESK_DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            standard_hours: 10.0,
            overtime_unit_hours: 2.0,
            extra_pay_policy: ExtraPayPolicy::Additive,
            data_dir: "./data".to_string(),
        }
    }
}
