// ⚙️ Bank configuration
//
// Loaded from a JSON file; every field is optional and falls back to the
// built-in defaults.
//
// Example:
// {
//   "bank_name": "Banco Digital",
//   "branch_code": 1,
//   "first_account_number": 1,
//   "maintenance_fee": 12.0,
//   "monthly_interest_rate": 0.005
// }

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::entities::checking::MAINTENANCE_FEE;
use crate::entities::savings::MONTHLY_INTEREST_RATE;
use crate::numbering::{DEFAULT_BRANCH_CODE, FIRST_ACCOUNT_NUMBER};

pub const DEFAULT_BANK_NAME: &str = "Banco Digital";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    pub bank_name: String,

    /// Branch assigned to every account the bank opens
    pub branch_code: u32,

    /// First number of the bank's account sequence
    pub first_account_number: u32,

    pub maintenance_fee: f64,

    /// Fraction per month (0.005 = 0.5%)
    pub monthly_interest_rate: f64,
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            bank_name: DEFAULT_BANK_NAME.to_string(),
            branch_code: DEFAULT_BRANCH_CODE,
            first_account_number: FIRST_ACCOUNT_NUMBER,
            maintenance_fee: MAINTENANCE_FEE,
            monthly_interest_rate: MONTHLY_INTEREST_RATE,
        }
    }
}

impl BankConfig {
    /// Load and validate a JSON config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config = Self::from_json(&content)?;
        tracing::info!(path = ?path.as_ref(), bank = %config.bank_name, "configuration loaded");
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: BankConfig =
            serde_json::from_str(content).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// `from_file` when a path is given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.bank_name.trim().is_empty() {
            bail!("bank_name must not be empty");
        }
        if self.first_account_number == 0 {
            bail!("first_account_number must be at least 1");
        }
        if !self.maintenance_fee.is_finite() || self.maintenance_fee < 0.0 {
            bail!(
                "maintenance_fee must be a non-negative number (got {})",
                self.maintenance_fee
            );
        }
        if !self.monthly_interest_rate.is_finite() || self.monthly_interest_rate < 0.0 {
            bail!(
                "monthly_interest_rate must be a non-negative number (got {})",
                self.monthly_interest_rate
            );
        }
        Ok(())
    }
}
