//! End-to-end account scenarios through the public API.

use rust_decimal_macros::dec;
use teller::{
    Account, AccountError, AccountStatus, AccountStore, CreditScoreAccount, ErrorKind, Operation,
    StoreError,
};

#[test]
fn deposit_allowed_but_withdraw_refused_while_unverified() {
    let mut account = Account::new(1, "Ada", dec!(0)).unwrap();

    account.deposit(dec!(200)).unwrap();
    assert_eq!(account.balance(), dec!(200));
    assert_eq!(account.status(), AccountStatus::Unverified);

    let err = account.withdraw(dec!(50)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(account.balance(), dec!(200));
}

#[test]
fn withdraw_whole_balance_then_overdraw() {
    let mut account = Account::new(1, "Ada", dec!(1000)).unwrap();
    account.verify().unwrap();

    account.withdraw(dec!(1000)).unwrap();
    assert_eq!(account.balance(), dec!(0));

    assert_eq!(
        account.withdraw(dec!(0.01)),
        Err(AccountError::InsufficientFunds {
            requested: dec!(0.01),
            available: dec!(0),
        })
    );
    assert_eq!(account.balance(), dec!(0));
}

#[test]
fn transfer_between_verified_accounts() {
    let mut store = AccountStore::new();
    store.open_account(1, "Sender", dec!(1000)).unwrap();
    store.open_account(2, "Receiver", dec!(500)).unwrap();
    store.verify_account(1).unwrap();
    store.verify_account(2).unwrap();

    let receiver_card = store.find_by_id(2).unwrap().card_number().to_string();
    store.transfer(1, &receiver_card, dec!(300), "x").unwrap();

    assert_eq!(store.find_by_id(1).unwrap().balance(), dec!(700));
    assert_eq!(store.find_by_id(2).unwrap().balance(), dec!(800));
}

#[test]
fn transfer_to_unknown_card_changes_nothing() {
    let mut store = AccountStore::new();
    store.open_account(1, "Sender", dec!(1000)).unwrap();
    store.verify_account(1).unwrap();

    let err = store
        .transfer(1, "9999 9999 9999 9999", dec!(10), "nobody")
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::Account(AccountError::RecipientUnavailable {
            card_number: "9999 9999 9999 9999".to_string(),
        })
    );
    assert_eq!(store.find_by_id(1).unwrap().balance(), dec!(1000));
}

#[test]
fn suspension_blocks_withdrawals_until_appeal() {
    let mut account = Account::new(1, "Ada", dec!(100)).unwrap();
    account.verify().unwrap();

    account.suspend().unwrap();
    assert_eq!(account.status(), AccountStatus::Suspended);
    assert!(account.withdraw(dec!(1)).is_err());
    assert!(!account.can(Operation::Withdraw));

    account.appeal().unwrap();
    assert_eq!(account.status(), AccountStatus::Verified);
    account.withdraw(dec!(1)).unwrap();
    assert_eq!(account.balance(), dec!(99));

    assert_eq!(
        account.history().get_path(),
        vec![
            &AccountStatus::Unverified,
            &AccountStatus::Verified,
            &AccountStatus::Suspended,
            &AccountStatus::Verified,
        ]
    );
}

#[test]
fn scored_account_bonus_then_overdraft_penalty() {
    let mut account = CreditScoreAccount::with_credit_score(1, "Ada", dec!(0)).unwrap();
    assert_eq!(account.credit_score(), 700);
    assert_eq!(account.transaction_limit(), dec!(7000));

    for _ in 0..3 {
        account.deposit(dec!(100)).unwrap();
    }
    assert_eq!(account.credit_score(), 705);
    assert_eq!(account.transaction_limit(), dec!(7050));

    account.verify().unwrap();
    // within the limit but above the balance
    let err = account.withdraw(dec!(7000)).unwrap_err();
    assert!(matches!(err, AccountError::InsufficientFunds { .. }));
    assert_eq!(account.credit_score(), 685);
    assert_eq!(account.overdraft_attempts(), 1);
    assert_eq!(account.balance(), dec!(300));
}

#[test]
fn scored_account_withdrawal_above_limit_is_refused() {
    let mut account = CreditScoreAccount::with_credit_score(1, "Ada", dec!(10000)).unwrap();
    account.verify().unwrap();

    let err = account.withdraw(dec!(8000)).unwrap_err();
    assert_eq!(
        err,
        AccountError::LimitExceeded {
            requested: dec!(8000),
            limit: dec!(7000),
        }
    );
    assert_eq!(account.balance(), dec!(10000));

    account.withdraw(dec!(3000)).unwrap();
    assert_eq!(account.balance(), dec!(7000));
}

#[test]
fn closed_account_accepts_only_views() {
    let mut account = Account::new(1, "Ada", dec!(50)).unwrap();
    account.close().unwrap();

    assert!(account.deposit(dec!(1)).is_err());
    assert!(account.verify().is_err());
    assert!(account.close().is_err());
    assert!(account.can(Operation::View));
    assert_eq!(account.balance(), dec!(50));

    let summary = account.summary();
    assert_eq!(summary.status, AccountStatus::Closed);
    assert_eq!(summary.card_number, "0001 0001 0001 0001");
}
