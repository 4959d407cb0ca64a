//! Teller: bank account lifecycle as a status-gated state machine
//!
//! An account moves through `Unverified -> Verified -> Suspended -> Closed`
//! and its status decides which money movements are allowed. Balances never
//! go negative, transfers conserve the total between the two accounts, and
//! every refusal is an ordinary `Err` that leaves the account untouched.
//!
//! # Core Concepts
//!
//! - **Account**: balance, status and identity, with status-gated operations
//! - **TransactionAuthorizer**: pure permission table plus amount checks
//! - **TransactionObserver**: policy hooked into account operations
//! - **CreditScore**: observer that caps withdrawals and tracks a bounded score
//! - **AccountStore**: caller-owned lookup by id and card number
//!
//! # Example
//!
//! ```rust
//! use teller::{AccountStatus, AccountStore};
//! use rust_decimal::Decimal;
//!
//! let mut store = AccountStore::new();
//! store.open_account(1, "Ada", Decimal::from(1000)).unwrap();
//! store.open_account(2, "Lin", Decimal::from(500)).unwrap();
//!
//! store.verify_account(1).unwrap();
//! store.suspend_account(1).unwrap();
//! assert!(store.withdraw(1, Decimal::ONE).is_err());
//!
//! store.appeal_account(1).unwrap();
//! store.transfer(1, "0002 0002 0002 0002", Decimal::from(300), "rent").unwrap();
//!
//! let sender = store.find_by_id(1).unwrap();
//! assert_eq!(sender.status(), AccountStatus::Verified);
//! assert_eq!(sender.balance(), Decimal::from(700));
//! ```

mod macros;

pub mod account;
pub mod authorizer;
pub mod core;
pub mod credit;
pub mod store;

// Re-export commonly used types
pub use account::{
    Account, AccountError, AccountLookup, AccountSnapshot, AccountStatus, AccountSummary,
    ErrorKind, NoObserver, TransactionObserver, Trigger,
};
pub use authorizer::{Operation, TransactionAuthorizer};
pub use credit::{CreditScore, CreditScoreAccount, ScoringRules};
pub use store::{AccountStore, StoreError};
