// 🧾 Checking account - monthly maintenance fee
//
// A declined fee is an outcome, not an error: callers inspect `FeeCharge`.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::entities::account::{AccountCore, AccountType, BankAccount};
use crate::entities::client::SharedClient;
use crate::error::{AccountError, AccountResult};
use crate::numbering::AccountNumberSequence;
use crate::statement::StatementDetail;

/// Default monthly maintenance fee
pub const MAINTENANCE_FEE: f64 = 12.0;

/// Result of a maintenance fee attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FeeCharge {
    /// Fee subtracted from the balance
    Charged { fee: f64 },

    /// Balance below the fee; nothing changed
    Declined { fee: f64, balance: f64 },
}

impl FeeCharge {
    pub fn is_charged(&self) -> bool {
        matches!(self, FeeCharge::Charged { .. })
    }
}

#[derive(Debug)]
pub struct CheckingAccount {
    core: AccountCore,
    maintenance_fee: f64,
}

impl CheckingAccount {
    /// Fails with `InvalidFee` unless the fee is finite and non-negative
    pub fn new(core: AccountCore, maintenance_fee: f64) -> AccountResult<Self> {
        if !maintenance_fee.is_finite() || maintenance_fee < 0.0 {
            return Err(AccountError::InvalidFee {
                fee: maintenance_fee,
            });
        }

        Ok(CheckingAccount {
            core,
            maintenance_fee,
        })
    }

    /// Default branch, default fee, next number from `numbers`
    pub fn open(owner: SharedClient, numbers: &mut AccountNumberSequence) -> AccountResult<Self> {
        Self::new(AccountCore::open(owner, numbers)?, MAINTENANCE_FEE)
    }

    pub fn maintenance_fee(&self) -> f64 {
        self.maintenance_fee
    }

    /// Subtract the fee when the balance covers it.
    pub fn charge_maintenance_fee(&mut self) -> FeeCharge {
        let fee = self.maintenance_fee;
        let balance = self.core.balance();

        if balance >= fee {
            self.core.debit_unchecked(fee);
            info!(account = self.core.number(), fee, "maintenance fee charged");
            FeeCharge::Charged { fee }
        } else {
            warn!(
                account = self.core.number(),
                fee, balance, "insufficient balance for maintenance fee"
            );
            FeeCharge::Declined { fee, balance }
        }
    }
}

impl BankAccount for CheckingAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    fn account_type(&self) -> AccountType {
        AccountType::Checking
    }

    fn statement_detail(&self) -> StatementDetail {
        StatementDetail::MaintenanceFee(self.maintenance_fee)
    }
}
