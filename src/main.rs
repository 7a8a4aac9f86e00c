use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bank_registry::{Account, Bank, BankAccount, BankConfig, Client, FeeCharge};

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    json: bool,
    csv: bool,
}

fn parse_args() -> Result<Options> {
    let mut options = Options::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a file path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--json" => options.json = true,
            "--csv" => options.csv = true,
            other => bail!(
                "Unknown argument: {} (usage: bank-demo [--config <path>] [--json] [--csv])",
                other
            ),
        }
    }

    Ok(options)
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays the demo transcript
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = parse_args()?;
    let config = BankConfig::load(options.config.as_deref())?;

    run_demo(&config, &options)
}

fn print_statement(account: &Account, json: bool) -> Result<()> {
    let statement = account.statement();
    if json {
        println!("{}", statement.to_json().context("Failed to serialize statement")?);
    } else {
        println!("{}", statement);
    }
    Ok(())
}

fn find(bank: &Bank, number: u32) -> Result<&Account> {
    bank.find_account(number)
        .with_context(|| format!("Account {} is not registered", number))
}

fn run_demo(config: &BankConfig, options: &Options) -> Result<()> {
    // Clients
    let joao = Client::shared("João Silva", "123.456.789-00", "(11) 99999-9999");
    let maria = Client::shared("Maria Santos", "987.654.321-00", "(11) 88888-8888");

    // Accounts
    let mut bank = Bank::with_config(config)?;
    let checking = bank.open_checking(joao)?;
    let savings = bank.open_savings(maria)?;

    println!("=== BANK SYSTEM DEMO ===\n");

    println!("1. Initial deposits:");
    for (number, amount) in [(checking, 1000.0), (savings, 500.0)] {
        bank.find_account_mut(number)
            .with_context(|| format!("Account {} is not registered", number))?
            .deposit(amount)?;
        println!("Deposited {:.2} into account {}", amount, number);
    }
    println!();

    println!("2. Bank accounts:");
    if options.csv {
        bank.export_summaries_csv(std::io::stdout())?;
    } else {
        println!("{}", bank);
    }
    println!();

    println!("3. Statements:");
    for number in [checking, savings] {
        print_statement(find(&bank, number)?, options.json)?;
        println!();
    }

    println!("4. Transfer:");
    match bank.transfer(checking, savings, 200.0) {
        Ok(()) => println!("Transferred 200.00 from checking to savings\n"),
        Err(e) => println!("Transfer failed: {}\n", e),
    }

    println!("5. Withdrawal:");
    let withdrawal = bank
        .find_account_mut(savings)
        .with_context(|| format!("Account {} is not registered", savings))?
        .withdraw(100.0);
    match withdrawal {
        Ok(()) => println!("Withdrew 100.00 from savings\n"),
        Err(e) => println!("Withdrawal failed: {}\n", e),
    }

    println!("6. Account-specific operations:");
    if let Some(account) = bank.find_account_mut(checking).and_then(Account::as_checking_mut) {
        match account.charge_maintenance_fee() {
            FeeCharge::Charged { fee } => println!("Maintenance fee charged: {:.2}", fee),
            FeeCharge::Declined { .. } => {
                println!("Insufficient balance for the maintenance fee")
            }
        }
    }
    if let Some(account) = bank.find_account_mut(savings).and_then(Account::as_savings_mut) {
        let interest = account.apply_interest();
        println!("Interest applied: {:.2}", interest);
    }
    println!();

    println!("7. Final statements:");
    for number in [checking, savings] {
        print_statement(find(&bank, number)?, options.json)?;
        println!();
    }

    // Same statement call for every variant, straight off the registry
    println!("8. Polymorphism:");
    for account in bank.accounts() {
        print_statement(account, options.json)?;
        println!();
    }

    println!("Total balance at {}: {:.2}", bank.name(), bank.total_balance());

    Ok(())
}
