// 🐖 Savings account - monthly interest

use tracing::info;

use crate::entities::account::{AccountCore, AccountType, BankAccount};
use crate::entities::client::SharedClient;
use crate::error::{AccountError, AccountResult};
use crate::numbering::AccountNumberSequence;
use crate::statement::StatementDetail;

/// Default monthly interest rate (0.5% a month)
pub const MONTHLY_INTEREST_RATE: f64 = 0.005;

#[derive(Debug)]
pub struct SavingsAccount {
    core: AccountCore,
    monthly_interest_rate: f64,
}

impl SavingsAccount {
    /// Fails with `InvalidRate` unless the rate is finite and non-negative
    pub fn new(core: AccountCore, monthly_interest_rate: f64) -> AccountResult<Self> {
        if !monthly_interest_rate.is_finite() || monthly_interest_rate < 0.0 {
            return Err(AccountError::InvalidRate {
                rate: monthly_interest_rate,
            });
        }

        Ok(SavingsAccount {
            core,
            monthly_interest_rate,
        })
    }

    /// Default branch, default rate, next number from `numbers`
    pub fn open(owner: SharedClient, numbers: &mut AccountNumberSequence) -> AccountResult<Self> {
        Self::new(AccountCore::open(owner, numbers)?, MONTHLY_INTEREST_RATE)
    }

    pub fn monthly_interest_rate(&self) -> f64 {
        self.monthly_interest_rate
    }

    /// Credit one month of interest and return it. Never fails; zero
    /// balance earns zero.
    pub fn apply_interest(&mut self) -> f64 {
        let interest = self.core.balance() * self.monthly_interest_rate;
        self.core.credit_unchecked(interest);
        info!(account = self.core.number(), interest, "interest applied");
        interest
    }
}

impl BankAccount for SavingsAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    fn account_type(&self) -> AccountType {
        AccountType::Savings
    }

    fn statement_detail(&self) -> StatementDetail {
        StatementDetail::MonthlyInterest {
            rate: self.monthly_interest_rate,
        }
    }
}
