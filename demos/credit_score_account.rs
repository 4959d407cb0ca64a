//! Credit Score Account
//!
//! This example walks two accounts through their lifecycle in a store.
//!
//! Key concepts:
//! - Status-gated deposits, withdrawals and transfers
//! - Suspension and appeal
//! - A credit score observer capping withdrawals
//! - Scoring rules loaded from JSON
//!
//! Run with: RUST_LOG=teller=debug cargo run --example credit_score_account

use rust_decimal::Decimal;
use teller::{
    Account, AccountStore, CreditScore, CreditScoreAccount, Operation, ScoringRules, StoreError,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Credit Score Account Example ===\n");

    let rules = ScoringRules::from_json(r#"{"overdraft_penalty": 30}"#)?;
    let mut store: AccountStore<CreditScore> = AccountStore::default();
    store.insert(Account::with_observer(
        1,
        "Ada",
        Decimal::ZERO,
        CreditScore::with_rules(rules)?,
    )?)?;
    store.insert(CreditScoreAccount::with_credit_score(
        2,
        "Lin",
        Decimal::from(500),
    )?)?;

    println!("Scenario 1: Deposits while unverified");
    for _ in 0..3 {
        store.deposit(1, Decimal::from(100))?;
    }
    print_account(&store, 1);
    if let Err(err) = store.withdraw(1, Decimal::from(50)) {
        println!("  withdraw refused: {err}\n");
    }

    println!("Scenario 2: Overdraft attempt");
    store.verify_account(1)?;
    if let Err(err) = store.withdraw(1, Decimal::from(1000)) {
        println!("  withdraw refused: {err}");
    }
    print_account(&store, 1);
    println!();

    println!("Scenario 3: Suspend and appeal");
    store.verify_account(2)?;
    store.suspend_account(2)?;
    println!(
        "  transfer allowed while suspended: {}",
        store.is_operation_allowed(2, Operation::Transfer)
    );
    store.appeal_account(2)?;
    print_account(&store, 2);
    println!();

    println!("Scenario 4: Transfer");
    store.transfer(1, "0002 0002 0002 0002", Decimal::from(120), "books")?;
    print_account(&store, 1);
    print_account(&store, 2);
    println!();

    println!("Scenario 5: Service validation");
    match store.validate_transaction(1, Operation::Withdraw, Decimal::from(20_000)) {
        Err(StoreError::Rejected { violations, .. }) => {
            for violation in violations {
                println!("  - {violation}");
            }
        }
        other => println!("  unexpected outcome: {other:?}"),
    }
    println!();

    println!("Scenario 6: Close");
    store.close_account(2)?;
    if let Err(err) = store.close_account(2) {
        println!("  second close refused: {err}");
    }

    let summaries: Vec<_> = store.iter().map(|account| account.summary()).collect();
    println!("\n{}", serde_json::to_string_pretty(&summaries)?);

    Ok(())
}

fn print_account(store: &AccountStore<CreditScore>, id: u32) {
    if let Some(account) = store.find_by_id(id) {
        println!(
            "  #{} {} balance={} status={} score={} limit={}",
            account.id(),
            account.client_name(),
            account.balance(),
            account.status(),
            account.credit_score(),
            account.transaction_limit()
        );
    }
}
