//! Credit scoring for accounts.
//!
//! [`CreditScore`] is a [`TransactionObserver`](crate::account::TransactionObserver):
//! attached to an account it caps each withdrawal at `score * 10` and
//! adjusts the score as deposits, withdrawals, suspensions and appeals
//! succeed or fail. The score always stays within `[300, 850]`.
//!
//! # Example
//!
//! ```rust
//! use teller::CreditScoreAccount;
//! use rust_decimal::Decimal;
//!
//! let mut account = CreditScoreAccount::with_credit_score(1, "Ada", Decimal::ZERO).unwrap();
//! for _ in 0..3 {
//!     account.deposit(Decimal::from(100)).unwrap();
//! }
//! assert_eq!(account.credit_score(), 705);
//! assert_eq!(account.transaction_limit(), Decimal::from(7050));
//! ```

pub mod config;
pub mod score;

pub use config::{ConfigError, RecalculationWeights, ScoringRules};
pub use score::{CreditScore, CreditScoreAccount};
