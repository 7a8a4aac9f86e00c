// 🏦 Bank Entity - passive registry of accounts
//
// The bank keeps accounts in insertion order and hands out account numbers
// from its own sequence. It never mutates balances on its own; `transfer`
// only locates two registered accounts and delegates to the account rule.

use anyhow::{Context, Result};
use std::fmt;
use std::io::Write;
use tracing::info;

use crate::config::BankConfig;
use crate::entities::account::{Account, AccountCore, BankAccount};
use crate::entities::checking::{CheckingAccount, MAINTENANCE_FEE};
use crate::entities::client::SharedClient;
use crate::entities::savings::{SavingsAccount, MONTHLY_INTEREST_RATE};
use crate::error::{AccountError, AccountResult};
use crate::numbering::{AccountNumberSequence, DEFAULT_BRANCH_CODE};
use crate::statement::AccountSummary;

#[derive(Debug)]
pub struct Bank {
    name: String,
    branch_code: u32,
    maintenance_fee: f64,
    monthly_interest_rate: f64,

    /// Source of numbers for accounts opened through this bank
    numbers: AccountNumberSequence,

    /// Insertion order preserved, no duplicate check
    accounts: Vec<Account>,
}

impl Bank {
    /// Empty bank with default branch, fee and rate
    pub fn new(name: impl Into<String>) -> Self {
        Bank {
            name: name.into(),
            branch_code: DEFAULT_BRANCH_CODE,
            maintenance_fee: MAINTENANCE_FEE,
            monthly_interest_rate: MONTHLY_INTEREST_RATE,
            numbers: AccountNumberSequence::new(),
            accounts: Vec::new(),
        }
    }

    /// Bank built from a config; the config is validated first
    pub fn with_config(config: &BankConfig) -> Result<Self> {
        config.validate()?;

        Ok(Bank {
            name: config.bank_name.clone(),
            branch_code: config.branch_code,
            maintenance_fee: config.maintenance_fee,
            monthly_interest_rate: config.monthly_interest_rate,
            numbers: AccountNumberSequence::starting_at(config.first_account_number),
            accounts: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn branch_code(&self) -> u32 {
        self.branch_code
    }

    /// The bank's own number sequence, for accounts built outside `open_*`
    pub fn numbers_mut(&mut self) -> &mut AccountNumberSequence {
        &mut self.numbers
    }

    /// Register an account (no duplicate check)
    pub fn add_account(&mut self, account: impl Into<Account>) {
        let account = account.into();
        info!(
            bank = %self.name,
            account = account.number(),
            kind = account.account_type().as_str(),
            "account registered"
        );
        self.accounts.push(account);
    }

    /// Open and register a checking account, returning its number.
    ///
    /// Fails with `NumbersExhausted` once the bank's sequence is used up.
    pub fn open_checking(&mut self, owner: SharedClient) -> AccountResult<u32> {
        let core = self.next_core(owner)?;
        let number = core.number();
        self.add_account(CheckingAccount::new(core, self.maintenance_fee)?);
        Ok(number)
    }

    /// Open and register a savings account, returning its number
    pub fn open_savings(&mut self, owner: SharedClient) -> AccountResult<u32> {
        let core = self.next_core(owner)?;
        let number = core.number();
        self.add_account(SavingsAccount::new(core, self.monthly_interest_rate)?);
        Ok(number)
    }

    fn next_core(&mut self, owner: SharedClient) -> AccountResult<AccountCore> {
        let number = self.numbers.next_number()?;
        Ok(AccountCore::new(self.branch_code, number, owner))
    }

    /// Summaries in insertion order
    pub fn list_accounts(&self) -> impl Iterator<Item = AccountSummary> + '_ {
        self.accounts.iter().map(|account| account.summary())
    }

    /// First account with this number (insertion order), if any
    pub fn find_account(&self, number: u32) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    pub fn find_account_mut(&mut self, number: u32) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
    }

    fn position(&self, number: u32) -> AccountResult<usize> {
        self.accounts
            .iter()
            .position(|account| account.number() == number)
            .ok_or(AccountError::AccountNotFound(number))
    }

    /// Transfer between two registered accounts.
    ///
    /// Unknown numbers fail with `AccountNotFound` before any balance is
    /// touched; the rest follows `BankAccount::transfer`.
    pub fn transfer(&mut self, from: u32, to: u32, amount: f64) -> AccountResult<()> {
        let source = self.position(from)?;
        let destination = self.position(to)?;

        if source == destination {
            let account = &mut self.accounts[source];
            account.withdraw(amount)?;
            return account.deposit(amount);
        }

        let (source, destination) = if source < destination {
            let (left, right) = self.accounts.split_at_mut(destination);
            (&mut left[source], &mut right[0])
        } else {
            let (left, right) = self.accounts.split_at_mut(source);
            (&mut right[0], &mut left[destination])
        };

        source.transfer(amount, destination)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Sum of all registered balances
    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(|account| account.balance()).sum()
    }

    /// Write the listing as CSV (header + one row per account)
    pub fn export_summaries_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        for summary in self.list_accounts() {
            wtr.serialize(&summary)
                .with_context(|| format!("Failed to write account {}", summary.number))?;
        }

        wtr.flush().context("Failed to flush CSV output")?;
        Ok(())
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!("=== Accounts at {} ===", self.name);
        writeln!(f, "{}", title)?;
        for summary in self.list_accounts() {
            writeln!(f, "{}", summary)?;
        }
        write!(f, "{}", "=".repeat(title.chars().count()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
