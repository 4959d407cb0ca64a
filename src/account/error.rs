//! Account operation errors.

use crate::account::status::{AccountStatus, Trigger};
use crate::authorizer::Operation;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Coarse classification of why an operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Amount is non-positive or above the applicable ceiling.
    InvalidAmount,
    /// The account status forbids the operation.
    InvalidState,
    /// Transfer target is missing or closed.
    RecipientUnavailable,
    /// The status has no transition for the trigger.
    TransitionRejected,
}

/// Errors returned by account transactions and status transitions.
///
/// A returned error always means nothing was applied: balance, status and
/// history are exactly as they were before the call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    #[error("Amount must be positive (got {amount})")]
    InvalidAmount { amount: Decimal },

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Amount {requested} exceeds transaction limit {limit}")]
    LimitExceeded { requested: Decimal, limit: Decimal },

    #[error("{operation} is not permitted while account is {status:?}")]
    InvalidState {
        operation: Operation,
        status: AccountStatus,
    },

    #[error("Recipient '{card_number}' is unavailable")]
    RecipientUnavailable { card_number: String },

    #[error("Cannot {trigger} an account that is {from:?}")]
    TransitionRejected { trigger: Trigger, from: AccountStatus },

    #[error("Opening balance cannot be negative (got {amount})")]
    NegativeOpeningBalance { amount: Decimal },
}

impl AccountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAmount { .. }
            | Self::InsufficientFunds { .. }
            | Self::LimitExceeded { .. }
            | Self::NegativeOpeningBalance { .. } => ErrorKind::InvalidAmount,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::RecipientUnavailable { .. } => ErrorKind::RecipientUnavailable,
            Self::TransitionRejected { .. } => ErrorKind::TransitionRejected,
        }
    }
}
