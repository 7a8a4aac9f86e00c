// ⚠️ Account errors
//
// Deposit/withdraw failures are errors. A declined maintenance fee is NOT an
// error, it is reported through `FeeCharge` (see entities::checking).

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AccountError {
    /// Amount was zero, negative or not a finite number
    InvalidAmount { amount: f64 },

    /// Withdrawal larger than the current balance
    InsufficientFunds { requested: f64, available: f64 },

    /// No registered account carries this number
    AccountNotFound(u32),

    /// The number sequence already handed out `u32::MAX`
    NumbersExhausted,

    /// Maintenance fee negative or not a finite number
    InvalidFee { fee: f64 },

    /// Interest rate negative or not a finite number
    InvalidRate { rate: f64 },
}

impl AccountError {
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, AccountError::InvalidAmount { .. })
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, AccountError::InsufficientFunds { .. })
    }
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountError::InvalidAmount { amount } => {
                write!(f, "Amount must be positive (got {})", amount)
            }
            AccountError::InsufficientFunds { requested, available } => write!(
                f,
                "Insufficient funds: requested {:.2}, available {:.2}",
                requested, available
            ),
            AccountError::AccountNotFound(number) => {
                write!(f, "Account not found: {}", number)
            }
            AccountError::NumbersExhausted => f.write_str("No account numbers left"),
            AccountError::InvalidFee { fee } => {
                write!(f, "Maintenance fee must be a non-negative number (got {})", fee)
            }
            AccountError::InvalidRate { rate } => {
                write!(f, "Interest rate must be a non-negative number (got {})", rate)
            }
        }
    }
}

impl std::error::Error for AccountError {}

pub type AccountResult<T> = Result<T, AccountError>;
