//! Status-gated transaction authorization.
//!
//! The authorizer is a pure policy: given an account's status and balance it
//! decides whether an operation of a given amount may proceed. Accounts
//! consult it for their own checks; services can use [`TransactionAuthorizer::validate`]
//! to collect every reason a request would be refused instead of only the first.
//!
//! # Example
//!
//! ```rust
//! use teller::authorizer::{Operation, TransactionAuthorizer};
//! use teller::AccountStatus;
//! use rust_decimal::Decimal;
//!
//! let rules = TransactionAuthorizer::builder()
//!     .max_amount(Decimal::from(10_000))
//!     .build();
//!
//! let verdict = rules.validate(
//!     AccountStatus::Suspended,
//!     Operation::Withdraw,
//!     Decimal::from(20_000),
//!     Decimal::from(100),
//! );
//! assert!(verdict.is_failure());
//! ```

pub mod builder;
pub mod operation;
pub mod rules;

pub use builder::AuthorizerBuilder;
pub use operation::{Operation, UnknownOperation};
pub use rules::{TransactionAuthorizer, SERVICE_CEILING};
