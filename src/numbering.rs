// 🔢 Account numbering
//
// Explicit counter instead of process-wide state: a Bank owns one, tests can
// build their own and reset it.

use crate::error::{AccountError, AccountResult};

/// Single branch every account belongs to unless configured otherwise
pub const DEFAULT_BRANCH_CODE: u32 = 1;

/// First number handed out by a fresh sequence
pub const FIRST_ACCOUNT_NUMBER: u32 = 1;

/// Monotonic source of account numbers.
///
/// Numbers handed out by one sequence are strictly increasing and never
/// repeat. `u32::MAX` is handed out once; after that the sequence is
/// exhausted and every call fails with `NumbersExhausted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountNumberSequence {
    next: u32,
    exhausted: bool,
}

impl AccountNumberSequence {
    pub fn new() -> Self {
        Self::starting_at(FIRST_ACCOUNT_NUMBER)
    }

    pub fn starting_at(first: u32) -> Self {
        AccountNumberSequence {
            next: first,
            exhausted: false,
        }
    }

    /// Hand out the current number and advance
    pub fn next_number(&mut self) -> AccountResult<u32> {
        if self.exhausted {
            return Err(AccountError::NumbersExhausted);
        }

        let number = self.next;
        match self.next.checked_add(1) {
            Some(next) => self.next = next,
            None => self.exhausted = true,
        }
        Ok(number)
    }

    /// Number the next call to `next_number` will return, `None` once exhausted
    pub fn peek(&self) -> Option<u32> {
        (!self.exhausted).then_some(self.next)
    }

    pub fn reset(&mut self, first: u32) {
        self.next = first;
        self.exhausted = false;
    }
}

impl Default for AccountNumberSequence {
    fn default() -> Self {
        Self::new()
    }
}
