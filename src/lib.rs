// Bank Registry - Core Library
// Account model (checking / savings), clients and the bank registry.
// Used by the demo binary and the integration tests.

pub mod error;
pub mod numbering;
pub mod statement;
pub mod config;
pub mod entities;

// Re-export commonly used types
pub use error::{AccountError, AccountResult};
pub use numbering::{AccountNumberSequence, DEFAULT_BRANCH_CODE, FIRST_ACCOUNT_NUMBER};
pub use statement::{AccountSummary, Statement, StatementDetail};
pub use config::{BankConfig, DEFAULT_BANK_NAME};
pub use entities::{
    Account, AccountCore, AccountType, BankAccount,
    CheckingAccount, FeeCharge, MAINTENANCE_FEE,
    SavingsAccount, MONTHLY_INTEREST_RATE,
    Client, SharedClient,
    Bank,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
