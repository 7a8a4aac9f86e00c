// Entity Models
//
// - Client: identity fields, shared between accounts
// - Account: balance rules, with Checking and Savings variants
// - Bank: passive registry of accounts

pub mod client;
pub mod account;
pub mod checking;
pub mod savings;
pub mod bank;

pub use client::{Client, SharedClient};
pub use account::{Account, AccountCore, AccountType, BankAccount};
pub use checking::{CheckingAccount, FeeCharge, MAINTENANCE_FEE};
pub use savings::{SavingsAccount, MONTHLY_INTEREST_RATE};
pub use bank::Bank;
