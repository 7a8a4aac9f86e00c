// 📄 Statements and listing summaries
//
// Read-only views of an account. Text rendering goes through `Display`,
// JSON/CSV through serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::account::{AccountCore, AccountType};

// ============================================================================
// STATEMENT DETAIL
// ============================================================================

/// The variant-specific line of a statement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StatementDetail {
    /// Checking: monthly maintenance fee
    MaintenanceFee(f64),

    /// Savings: monthly interest rate as a fraction (0.005 = 0.5%)
    MonthlyInterest { rate: f64 },
}

impl fmt::Display for StatementDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementDetail::MaintenanceFee(fee) => write!(f, "Maintenance fee: {:.2}", fee),
            StatementDetail::MonthlyInterest { rate } => {
                write!(f, "Monthly interest: {:.1}%", rate * 100.0)
            }
        }
    }
}

// ============================================================================
// STATEMENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub account_type: AccountType,
    pub owner_name: String,
    pub branch_code: u32,
    pub number: u32,
    pub balance: f64,
    pub detail: StatementDetail,
    pub issued_at: DateTime<Utc>,
}

impl Statement {
    pub fn new(core: &AccountCore, account_type: AccountType, detail: StatementDetail) -> Self {
        Statement {
            account_type,
            owner_name: core.owner_name(),
            branch_code: core.branch_code(),
            number: core.number(),
            balance: core.balance(),
            detail,
            issued_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!("=== {} Account Statement ===", self.account_type);
        writeln!(f, "{}", title)?;
        writeln!(f, "Owner: {}", self.owner_name)?;
        writeln!(f, "Branch: {}", self.branch_code)?;
        writeln!(f, "Number: {}", self.number)?;
        writeln!(f, "Balance: {:.2}", self.balance)?;
        writeln!(f, "{}", self.detail)?;
        write!(f, "{}", "=".repeat(title.chars().count()))
    }
}

// ============================================================================
// ACCOUNT SUMMARY (one listing row)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub account_type: AccountType,
    pub branch_code: u32,
    pub number: u32,
    pub owner_name: String,
}

impl AccountSummary {
    pub fn new(core: &AccountCore, account_type: AccountType) -> Self {
        AccountSummary {
            account_type,
            branch_code: core.branch_code(),
            number: core.number(),
            owner_name: core.owner_name(),
        }
    }
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} account - Branch: {}, Number: {}, Owner: {}",
            self.account_type, self.branch_code, self.number, self.owner_name
        )
    }
}
