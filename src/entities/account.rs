// 💳 Account Entity - shared balance rules for every account variant
//
// Layout:
// - AccountCore: branch, number, balance, owner + the mutation rules
// - BankAccount: contract implemented by each variant (and by `Account`)
// - Account: closed set of variants {Checking, Savings}
//
// Invariant: no single operation leaves the balance negative. Failed
// operations leave every balance untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::entities::checking::CheckingAccount;
use crate::entities::client::SharedClient;
use crate::entities::savings::SavingsAccount;
use crate::error::{AccountError, AccountResult};
use crate::numbering::{AccountNumberSequence, DEFAULT_BRANCH_CODE};
use crate::statement::{AccountSummary, Statement, StatementDetail};

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Checking account (monthly maintenance fee)
    Checking,

    /// Savings account (monthly interest)
    Savings,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ACCOUNT CORE
// ============================================================================

/// State and balance rules common to every account variant.
///
/// Not `Clone`: a copy would carry the same account number.
#[derive(Debug)]
pub struct AccountCore {
    branch_code: u32,
    number: u32,
    balance: f64,
    owner: SharedClient,
    opened_at: DateTime<Utc>,
}

impl AccountCore {
    /// Zero-balance account with an explicit branch and number
    pub fn new(branch_code: u32, number: u32, owner: SharedClient) -> Self {
        AccountCore {
            branch_code,
            number,
            balance: 0.0,
            owner,
            opened_at: Utc::now(),
        }
    }

    /// Zero-balance account on the default branch, numbered from `numbers`
    pub fn open(owner: SharedClient, numbers: &mut AccountNumberSequence) -> AccountResult<Self> {
        Ok(Self::new(DEFAULT_BRANCH_CODE, numbers.next_number()?, owner))
    }

    pub fn branch_code(&self) -> u32 {
        self.branch_code
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn owner(&self) -> &SharedClient {
        &self.owner
    }

    /// Owner's current name (follows renames of the shared client)
    pub fn owner_name(&self) -> String {
        self.owner.borrow().name().to_string()
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn withdraw(&mut self, amount: f64) -> AccountResult<()> {
        validate_amount(amount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        debug!(account = self.number, amount, balance = self.balance, "withdraw");
        Ok(())
    }

    pub fn deposit(&mut self, amount: f64) -> AccountResult<()> {
        validate_amount(amount)?;

        let balance = self.balance + amount;
        if !balance.is_finite() {
            return Err(AccountError::InvalidAmount { amount });
        }

        self.balance = balance;
        debug!(account = self.number, amount, balance = self.balance, "deposit");
        Ok(())
    }

    /// Withdraw here, deposit on `destination`. Both legs apply or neither.
    pub fn transfer(&mut self, amount: f64, destination: &mut AccountCore) -> AccountResult<()> {
        let before = self.balance;
        self.withdraw(amount)?;

        if let Err(err) = destination.deposit(amount) {
            self.balance = before;
            return Err(err);
        }

        info!(
            from = self.number,
            to = destination.number,
            amount,
            "transfer completed"
        );
        Ok(())
    }

    /// Subtract a charge the caller already checked against the balance
    pub(crate) fn debit_unchecked(&mut self, amount: f64) {
        self.balance -= amount;
    }

    /// Add a computed credit (interest); no positivity requirement
    pub(crate) fn credit_unchecked(&mut self, amount: f64) {
        self.balance += amount;
    }
}

fn validate_amount(amount: f64) -> AccountResult<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(AccountError::InvalidAmount { amount })
    }
}

// ============================================================================
// ACCOUNT CONTRACT
// ============================================================================

/// Contract shared by every account variant.
///
/// Variants only provide access to their `AccountCore`, their label and
/// their statement detail; deposit/withdraw/transfer are common.
pub trait BankAccount {
    fn core(&self) -> &AccountCore;

    fn core_mut(&mut self) -> &mut AccountCore;

    fn account_type(&self) -> AccountType;

    /// Variant-specific part of the statement
    fn statement_detail(&self) -> StatementDetail;

    fn deposit(&mut self, amount: f64) -> AccountResult<()> {
        self.core_mut().deposit(amount)
    }

    fn withdraw(&mut self, amount: f64) -> AccountResult<()> {
        self.core_mut().withdraw(amount)
    }

    fn transfer<D>(&mut self, amount: f64, destination: &mut D) -> AccountResult<()>
    where
        Self: Sized,
        D: BankAccount,
    {
        self.core_mut().transfer(amount, destination.core_mut())
    }

    fn balance(&self) -> f64 {
        self.core().balance()
    }

    fn number(&self) -> u32 {
        self.core().number()
    }

    fn branch_code(&self) -> u32 {
        self.core().branch_code()
    }

    fn owner(&self) -> &SharedClient {
        self.core().owner()
    }

    fn opened_at(&self) -> DateTime<Utc> {
        self.core().opened_at()
    }

    fn statement(&self) -> Statement {
        Statement::new(self.core(), self.account_type(), self.statement_detail())
    }

    fn summary(&self) -> AccountSummary {
        AccountSummary::new(self.core(), self.account_type())
    }
}

// ============================================================================
// ACCOUNT (closed set of variants)
// ============================================================================

#[derive(Debug)]
pub enum Account {
    Checking(CheckingAccount),
    Savings(SavingsAccount),
}

impl Account {
    pub fn as_checking(&self) -> Option<&CheckingAccount> {
        match self {
            Account::Checking(checking) => Some(checking),
            Account::Savings(_) => None,
        }
    }

    pub fn as_checking_mut(&mut self) -> Option<&mut CheckingAccount> {
        match self {
            Account::Checking(checking) => Some(checking),
            Account::Savings(_) => None,
        }
    }

    pub fn as_savings(&self) -> Option<&SavingsAccount> {
        match self {
            Account::Savings(savings) => Some(savings),
            Account::Checking(_) => None,
        }
    }

    pub fn as_savings_mut(&mut self) -> Option<&mut SavingsAccount> {
        match self {
            Account::Savings(savings) => Some(savings),
            Account::Checking(_) => None,
        }
    }
}

impl BankAccount for Account {
    fn core(&self) -> &AccountCore {
        match self {
            Account::Checking(checking) => checking.core(),
            Account::Savings(savings) => savings.core(),
        }
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        match self {
            Account::Checking(checking) => checking.core_mut(),
            Account::Savings(savings) => savings.core_mut(),
        }
    }

    fn account_type(&self) -> AccountType {
        match self {
            Account::Checking(checking) => checking.account_type(),
            Account::Savings(savings) => savings.account_type(),
        }
    }

    fn statement_detail(&self) -> StatementDetail {
        match self {
            Account::Checking(checking) => checking.statement_detail(),
            Account::Savings(savings) => savings.statement_detail(),
        }
    }
}

impl From<CheckingAccount> for Account {
    fn from(checking: CheckingAccount) -> Self {
        Account::Checking(checking)
    }
}

impl From<SavingsAccount> for Account {
    fn from(savings: SavingsAccount) -> Self {
        Account::Savings(savings)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::client::Client;
    use rstest::rstest;
    use std::rc::Rc;

    fn funded_core(balance: f64) -> AccountCore {
        let mut numbers = AccountNumberSequence::new();
        let mut core =
            AccountCore::open(Client::shared("Test", "000", "000"), &mut numbers).unwrap();
        if balance > 0.0 {
            core.deposit(balance).unwrap();
        }
        core
    }

    #[test]
    fn test_core_creation() {
        let owner = Client::shared("João Silva", "123", "456");
        let mut numbers = AccountNumberSequence::starting_at(7);
        let core = AccountCore::open(Rc::clone(&owner), &mut numbers).unwrap();

        assert_eq!(core.branch_code(), DEFAULT_BRANCH_CODE);
        assert_eq!(core.number(), 7);
        assert_eq!(core.balance(), 0.0);
        assert!(Rc::ptr_eq(core.owner(), &owner));
        assert!(core.opened_at() <= Utc::now());
        assert_eq!(numbers.peek(), Some(8));
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut core = funded_core(0.0);
        core.deposit(250.0).unwrap();
        core.deposit(50.0).unwrap();
        assert_eq!(core.balance(), 300.0);
    }

    #[test]
    fn test_withdraw_whole_balance() {
        let mut core = funded_core(100.0);
        core.withdraw(100.0).unwrap();
        assert_eq!(core.balance(), 0.0);
    }

    #[test]
    fn test_withdraw_over_balance_fails_without_effect() {
        let mut core = funded_core(100.0);
        let err = core.withdraw(100.01).unwrap_err();

        assert_eq!(
            err,
            AccountError::InsufficientFunds {
                requested: 100.01,
                available: 100.0
            }
        );
        assert_eq!(core.balance(), 100.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_invalid_amounts_rejected(#[case] amount: f64) {
        let mut core = funded_core(100.0);

        assert!(core.deposit(amount).unwrap_err().is_invalid_amount());
        assert!(core.withdraw(amount).unwrap_err().is_invalid_amount());
        assert_eq!(core.balance(), 100.0);
    }

    #[test]
    fn test_invalid_amount_checked_before_funds() {
        let mut core = funded_core(0.0);
        assert!(core.withdraw(-10.0).unwrap_err().is_invalid_amount());
    }

    #[test]
    fn test_open_fails_when_numbers_run_out() {
        let mut numbers = AccountNumberSequence::starting_at(u32::MAX);
        let owner = Client::shared("Ana", "1", "2");

        let last = AccountCore::open(Rc::clone(&owner), &mut numbers).unwrap();
        assert_eq!(last.number(), u32::MAX);
        assert_eq!(
            AccountCore::open(owner, &mut numbers).unwrap_err(),
            AccountError::NumbersExhausted
        );
    }

    #[test]
    fn test_deposit_overflowing_balance_rejected() {
        let mut core = funded_core(f64::MAX);

        let err = core.deposit(f64::MAX).unwrap_err();
        assert_eq!(err, AccountError::InvalidAmount { amount: f64::MAX });
        assert_eq!(core.balance(), f64::MAX);
    }

    #[test]
    fn test_transfer_rolls_back_when_deposit_fails() {
        let mut source = funded_core(f64::MAX);
        let mut destination = funded_core(f64::MAX);

        let err = source.transfer(f64::MAX, &mut destination).unwrap_err();
        assert!(err.is_invalid_amount());
        assert_eq!(source.balance(), f64::MAX);
        assert_eq!(destination.balance(), f64::MAX);
    }

    #[test]
    fn test_transfer_moves_amount() {
        let mut source = funded_core(1000.0);
        let mut destination = funded_core(500.0);

        source.transfer(200.0, &mut destination).unwrap();
        assert_eq!(source.balance(), 800.0);
        assert_eq!(destination.balance(), 700.0);
    }

    #[test]
    fn test_failed_transfer_touches_nothing() {
        let mut source = funded_core(50.0);
        let mut destination = funded_core(10.0);

        let err = source.transfer(80.0, &mut destination).unwrap_err();
        assert!(err.is_insufficient_funds());
        assert_eq!(source.balance(), 50.0);
        assert_eq!(destination.balance(), 10.0);

        let err = source.transfer(-1.0, &mut destination).unwrap_err();
        assert!(err.is_invalid_amount());
        assert_eq!(source.balance(), 50.0);
        assert_eq!(destination.balance(), 10.0);
    }

    #[test]
    fn test_owner_name_follows_shared_client() {
        let owner = Client::shared("Ana", "1", "2");
        let mut numbers = AccountNumberSequence::new();
        let core = AccountCore::open(Rc::clone(&owner), &mut numbers).unwrap();

        owner.borrow_mut().set_name("Ana Lima");
        assert_eq!(core.owner_name(), "Ana Lima");
    }

    #[test]
    fn test_account_variant_accessors() {
        let mut numbers = AccountNumberSequence::new();
        let owner = Client::shared("Ana", "1", "2");
        let mut checking: Account =
            CheckingAccount::open(Rc::clone(&owner), &mut numbers).unwrap().into();
        let mut savings: Account = SavingsAccount::open(owner, &mut numbers).unwrap().into();

        assert_eq!(checking.account_type(), AccountType::Checking);
        assert!(checking.as_checking().is_some());
        assert!(checking.as_savings().is_none());
        assert!(checking.as_checking_mut().is_some());

        assert_eq!(savings.account_type(), AccountType::Savings);
        assert!(savings.as_savings_mut().is_some());
        assert!(savings.as_checking().is_none());

        assert_eq!(checking.number(), 1);
        assert_eq!(savings.number(), 2);
    }

    #[test]
    fn test_transfer_between_variants() {
        let mut numbers = AccountNumberSequence::new();
        let mut checking: Account =
            CheckingAccount::open(Client::shared("A", "1", "1"), &mut numbers).unwrap().into();
        let mut savings: Account =
            SavingsAccount::open(Client::shared("B", "2", "2"), &mut numbers).unwrap().into();

        checking.deposit(300.0).unwrap();
        checking.transfer(120.0, &mut savings).unwrap();

        assert_eq!(checking.balance(), 180.0);
        assert_eq!(savings.balance(), 120.0);
    }

    #[test]
    fn test_account_type_labels() {
        assert_eq!(AccountType::Checking.as_str(), "Checking");
        assert_eq!(AccountType::Savings.to_string(), "Savings");
    }
}
