//! Property checks for the account balance rules
//!
//! 1. Withdraw within balance reduces it by exactly the amount
//! 2. Withdraw above balance fails and leaves the balance unchanged
//! 3. Non-positive amounts are rejected by deposit and withdraw
//! 4. Transfer is all-or-nothing and conserves the sum of both balances
//! 5. Account numbers are strictly increasing and unique
//! 6. Deposits never push the balance past a finite value

use bank_registry::{
    Account, AccountError, AccountNumberSequence, Bank, BankAccount, CheckingAccount, Client,
    SavingsAccount,
};
use proptest::prelude::*;
use std::collections::HashSet;

const TOLERANCE: f64 = 1e-6;

// =============================================================================
// Helpers / strategies
// =============================================================================

fn account_with(balance: f64, savings: bool) -> Account {
    let mut numbers = AccountNumberSequence::new();
    let owner = Client::shared("Prop", "000", "000");
    let mut account: Account = if savings {
        SavingsAccount::open(owner, &mut numbers).unwrap().into()
    } else {
        CheckingAccount::open(owner, &mut numbers).unwrap().into()
    };
    if balance > 0.0 {
        account.deposit(balance).unwrap();
    }
    account
}

fn balance_strategy() -> impl Strategy<Value = f64> {
    0.01f64..1_000_000.0
}

fn non_positive_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(-0.0), -1_000_000.0f64..0.0]
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn withdraw_within_balance_reduces_by_amount(
        balance in balance_strategy(),
        fraction in 0.0001f64..=1.0,
        savings in any::<bool>(),
    ) {
        let mut account = account_with(balance, savings);
        let amount = balance * fraction;
        prop_assume!(amount > 0.0 && amount <= balance);

        prop_assert!(account.withdraw(amount).is_ok());
        prop_assert!((account.balance() - (balance - amount)).abs() < TOLERANCE);
        prop_assert!(account.balance() >= 0.0);
    }

    #[test]
    fn withdraw_above_balance_fails_unchanged(
        balance in 0.0f64..1_000_000.0,
        excess in 0.01f64..1_000.0,
        savings in any::<bool>(),
    ) {
        let mut account = account_with(balance, savings);
        let before = account.balance();

        let result = account.withdraw(before + excess);
        prop_assert!(
            matches!(result, Err(AccountError::InsufficientFunds { .. })),
            "expected InsufficientFunds, got {:?}",
            result
        );
        prop_assert_eq!(account.balance(), before);
    }

    #[test]
    fn non_positive_amounts_are_invalid(
        balance in 0.0f64..1_000.0,
        amount in non_positive_strategy(),
        savings in any::<bool>(),
    ) {
        let mut account = account_with(balance, savings);
        let before = account.balance();

        prop_assert!(account.deposit(amount).unwrap_err().is_invalid_amount());
        prop_assert!(account.withdraw(amount).unwrap_err().is_invalid_amount());
        prop_assert_eq!(account.balance(), before);
    }

    #[test]
    fn transfer_is_atomic_and_conserves_sum(
        source_balance in 0.0f64..10_000.0,
        destination_balance in 0.0f64..10_000.0,
        amount in -100.0f64..20_000.0,
    ) {
        let mut source = account_with(source_balance, false);
        let mut destination = account_with(destination_balance, true);
        let (src_before, dst_before) = (source.balance(), destination.balance());

        match source.transfer(amount, &mut destination) {
            Ok(()) => {
                prop_assert!((source.balance() - (src_before - amount)).abs() < TOLERANCE);
                prop_assert!((destination.balance() - (dst_before + amount)).abs() < TOLERANCE);
                prop_assert!(
                    (source.balance() + destination.balance() - (src_before + dst_before)).abs()
                        < TOLERANCE
                );
            }
            Err(_) => {
                prop_assert_eq!(source.balance(), src_before);
                prop_assert_eq!(destination.balance(), dst_before);
            }
        }
    }

    #[test]
    fn deposits_keep_balance_finite(
        amounts in proptest::collection::vec(1e300f64..f64::MAX, 1..10),
        savings in any::<bool>(),
    ) {
        let mut account = account_with(0.0, savings);

        for amount in amounts {
            let before = account.balance();
            match account.deposit(amount) {
                Ok(()) => prop_assert!(account.balance() > before),
                Err(err) => {
                    prop_assert!(err.is_invalid_amount());
                    prop_assert_eq!(account.balance(), before);
                }
            }
            prop_assert!(account.balance().is_finite());
        }
    }

    #[test]
    fn account_numbers_strictly_increasing(start in 1u32..1_000_000, count in 1usize..200) {
        let mut numbers = AccountNumberSequence::starting_at(start);
        let owner = Client::shared("Prop", "000", "000");

        let assigned: Vec<u32> = (0..count)
            .map(|i| {
                if i % 2 == 0 {
                    CheckingAccount::open(owner.clone(), &mut numbers).unwrap().number()
                } else {
                    SavingsAccount::open(owner.clone(), &mut numbers).unwrap().number()
                }
            })
            .collect();

        prop_assert!(assigned.windows(2).all(|w| w[0] < w[1]));
        let unique: HashSet<u32> = assigned.iter().copied().collect();
        prop_assert_eq!(unique.len(), assigned.len());
    }

    #[test]
    fn bank_numbers_unique_across_variants(kinds in proptest::collection::vec(any::<bool>(), 1..100)) {
        let mut bank = Bank::new("Prop Bank");
        let owner = Client::shared("Prop", "000", "000");

        let numbers: Vec<u32> = kinds
            .iter()
            .map(|&savings| {
                if savings {
                    bank.open_savings(owner.clone()).unwrap()
                } else {
                    bank.open_checking(owner.clone()).unwrap()
                }
            })
            .collect();

        prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        for number in numbers {
            prop_assert_eq!(bank.find_account(number).map(|a| a.number()), Some(number));
        }
    }
}
