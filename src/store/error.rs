//! Store error types.

use crate::account::AccountError;
use thiserror::Error;

/// Errors returned by [`AccountStore`](crate::store::AccountStore) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Account {0} not found")]
    AccountNotFound(u32),

    #[error("Account id {0} is already in use")]
    DuplicateId(u32),

    /// The account itself refused the operation
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Service validation found one or more violations
    #[error("Transaction on account {id} rejected with {} violation(s)", .violations.len())]
    Rejected {
        id: u32,
        violations: Vec<AccountError>,
    },
}
